//! 分類ルールエンジン（Taxonomy v5b）
//!
//! 既存のカテゴリ・サブカテゴリがルールブロックのトリガーと完全一致した場合のみ、
//! 検索用テキストのキーワード照合で新しいカテゴリ・サブカテゴリを決定する。
//!
//! ## 処理フロー
//! 1. トリガー照合（前後空白を除いて完全一致、大文字小文字は区別）
//! 2. ブロック内のキーワードセットを宣言順に照合（最初のヒットを採用）
//! 3. ヒットなしならブロックの既定分類先
//!
//! トリガーに一致しないレコードは入力をそのまま返す。
//! サブサブカテゴリはどのルールでも変更しない。

pub mod keywords;
pub mod rules;

pub use keywords::KeywordSet;
pub use rules::{Label, Rule, RuleBlock, CATCH_ALL, RULE_BLOCKS};

use serde::Serialize;
use std::collections::HashMap;

lazy_static::lazy_static! {
    /// カテゴリ → ルールブロック
    static ref BLOCK_INDEX: HashMap<&'static str, &'static RuleBlock> =
        RULE_BLOCKS.iter().map(|block| (block.category, block)).collect();
}

/// 分類結果の決定理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "keywords", rename_all = "snake_case")]
pub enum Resolution {
    /// トリガー不一致（入力のまま）
    PassThrough,
    /// キーワードセットにヒット
    Keyword(&'static str),
    /// ブロックの既定分類先
    Fallback,
}

/// 分類結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: String,
    pub sub_category: String,
    pub sub_sub_category: String,
    pub resolution: Resolution,
}

impl Classification {
    /// カテゴリまたはサブカテゴリが変わったか
    pub fn differs_from(&self, category: &str, sub_category: &str) -> bool {
        self.category != category || self.sub_category != sub_category
    }
}

/// トリガーに一致するルールブロックを探す
pub fn find_block(category: &str, sub_category: &str) -> Option<&'static RuleBlock> {
    if sub_category.trim() != CATCH_ALL {
        return None;
    }
    BLOCK_INDEX.get(category.trim()).copied()
}

/// 1レコードを分類する
///
/// # Arguments
/// * `category` - 既存のカテゴリ（New Category）
/// * `sub_category` - 既存のサブカテゴリ（New Sub-Category）
/// * `description` - 検索用テキスト
/// * `sub_sub_category` - 既存のサブサブカテゴリ（そのまま引き継ぐ）
pub fn classify(
    category: &str,
    sub_category: &str,
    description: &str,
    sub_sub_category: &str,
) -> Classification {
    let Some(block) = find_block(category, sub_category) else {
        return Classification {
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            sub_sub_category: sub_sub_category.to_string(),
            resolution: Resolution::PassThrough,
        };
    };

    let description = description.to_lowercase();
    let (label, hit) = block.resolve(&description);

    Classification {
        category: label.category.to_string(),
        sub_category: label.sub_category.to_string(),
        sub_sub_category: sub_sub_category.to_string(),
        resolution: match hit {
            Some(rule) => Resolution::Keyword(rule.keywords.name),
            None => Resolution::Fallback,
        },
    }
}
