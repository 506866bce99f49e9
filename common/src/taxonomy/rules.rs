//! 再分類ルールテーブル
//!
//! トリガー（カテゴリ + キャッチオールのサブカテゴリ）ごとに、
//! キーワードセットと分類先の順序付きリストと、既定の分類先を宣言する。
//! リスト内は先頭から評価し、最初にヒットしたセットの分類先を採用する。

use super::keywords::*;

/// 再分類対象を示すキャッチオールのサブカテゴリ
pub const CATCH_ALL: &str = "Other Spare Parts";

/// カテゴリ・サブカテゴリの組
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub category: &'static str,
    pub sub_category: &'static str,
}

impl Label {
    pub const fn new(category: &'static str, sub_category: &'static str) -> Self {
        Self { category, sub_category }
    }
}

/// キーワードセット → 分類先
#[derive(Debug)]
pub struct Rule {
    pub keywords: &'static KeywordSet,
    pub target: Label,
}

/// 1カテゴリ分のルールブロック
#[derive(Debug)]
pub struct RuleBlock {
    /// トリガーとなるカテゴリ（サブカテゴリは常に `CATCH_ALL`）
    pub category: &'static str,
    pub rules: &'static [Rule],
    /// どのセットにもヒットしなかった場合の分類先
    pub fallback: Label,
}

impl RuleBlock {
    /// 検索用テキストから分類先を決定する
    ///
    /// ヒットしたルールを併せて返す（フォールバック時は None）。
    pub fn resolve(&self, description: &str) -> (Label, Option<&'static Rule>) {
        match self.rules.iter().find(|rule| rule.keywords.matches(description)) {
            Some(rule) => (rule.target, Some(rule)),
            None => (self.fallback, None),
        }
    }
}

const fn rule(keywords: &'static KeywordSet, target: Label) -> Rule {
    Rule { keywords, target }
}

// --- 分類先 ---

const ELECTRICAL_CONSUMABLES_LABEL: Label = Label::new("Electrical", "Electrical Consumables");
const ELECTRICAL_COMPONENTS_LABEL: Label =
    Label::new("Electrical", "Electrical Components & Devices");

const HULL_MAINTENANCE_LABEL: Label = Label::new("Hull", "Hull Maintenance & Repair");
const HULL_RIGGING_LABEL: Label = Label::new("Hull", "Deck Hardware & Rigging");

const FIRE_SAFETY_LABEL: Label = Label::new("Safety", "Fire Safety Equipment");
const RESCUE_SAFETY_LABEL: Label = Label::new("Safety", "Life Saving & Rescue Equipment");
const FIRST_AID_LABEL: Label = Label::new("Safety", "First Aid & Emergency Equipment");

const TOOLS_LABEL: Label = Label::new("Common Maintenance", "Hand & Power Tools");
const TEST_MEASUREMENT_LABEL: Label =
    Label::new("Common Maintenance", "Test & Measurement Equipment");
const CLEANING_LABEL: Label = Label::new("Common Maintenance", "Cleaning Equipment & Supplies");
const PPE_LABEL: Label = Label::new("Common Maintenance", "Personal Protective Equipment");
const DOCUMENTATION_LABEL: Label = Label::new("Common Maintenance", "Manuals & Documentation");
const MAINTENANCE_CONSUMABLES_LABEL: Label =
    Label::new("Common Maintenance", "Maintenance Consumables");

const GALLEY_LABEL: Label = Label::new("Recreational", "Galley Consumables");
const CABIN_OFFICE_LABEL: Label = Label::new("Recreational", "Cabin & Office Supplies");
const WATER_SPORTS_LABEL: Label = Label::new("Recreational", "Water Sports Equipment");
const FITNESS_LABEL: Label = Label::new("Recreational", "Fitness Equipment");
const RECREATIONAL_COMPONENTS_LABEL: Label =
    Label::new("Recreational", "Recreational Components");
const RECREATIONAL_CONSUMABLES_LABEL: Label =
    Label::new("Recreational", "Recreational Consumables");
const RECREATIONAL_STORAGE_LABEL: Label =
    Label::new("Recreational", "Recreational Cleaning & Storage");

const SAILS_CANVAS_LABEL: Label = Label::new("Sailing", "Sails & Canvas");
const RUNNING_RIGGING_LABEL: Label = Label::new("Sailing", "Running Rigging");
const STANDING_RIGGING_LABEL: Label = Label::new("Sailing", "Standing Rigging");
const WINCH_DECK_LABEL: Label = Label::new("Sailing", "Winches & Deck Hardware");
const SAILING_CONSUMABLES_LABEL: Label = Label::new("Sailing", "Sailing Consumables");
const SAIL_REPAIR_LABEL: Label = Label::new("Sailing", "Sail Repair & Sewing");

/// ルールテーブル（トリガーはカテゴリごとに一意）
pub static RULE_BLOCKS: &[RuleBlock] = &[
    RuleBlock {
        category: "Electrical",
        rules: &[
            rule(&ELECTRICAL_CONSUMABLES, ELECTRICAL_CONSUMABLES_LABEL),
            rule(&ELECTRICAL_COMPONENTS, ELECTRICAL_COMPONENTS_LABEL),
        ],
        fallback: ELECTRICAL_COMPONENTS_LABEL,
    },
    RuleBlock {
        category: "Hull",
        rules: &[
            rule(&HULL_MAINTENANCE, HULL_MAINTENANCE_LABEL),
            rule(&HULL_RIGGING, HULL_RIGGING_LABEL),
            rule(&HULL_FIRE_SAFETY, FIRE_SAFETY_LABEL),
            rule(&RESCUE_SAFETY, RESCUE_SAFETY_LABEL),
        ],
        fallback: HULL_MAINTENANCE_LABEL,
    },
    RuleBlock {
        category: "Common Maintenance",
        rules: &[
            rule(&MAINTENANCE_TOOLS, TOOLS_LABEL),
            rule(&TEST_MEASUREMENT, TEST_MEASUREMENT_LABEL),
            rule(&CLEANING, CLEANING_LABEL),
            rule(&PPE, PPE_LABEL),
            rule(&DOCUMENTATION, DOCUMENTATION_LABEL),
        ],
        fallback: MAINTENANCE_CONSUMABLES_LABEL,
    },
    RuleBlock {
        category: "Recreational",
        rules: &[
            rule(&CLEANING, CLEANING_LABEL),
            rule(&TOOLS_LITERAL, TOOLS_LABEL),
            rule(&MEDICAL_SAFETY_LITERAL, FIRST_AID_LABEL),
            rule(&FOOD_GALLEY_LITERAL, GALLEY_LABEL),
            rule(&OFFICE_DECOR, CABIN_OFFICE_LABEL),
            rule(&WATER_RECREATION, WATER_SPORTS_LABEL),
            rule(&FITNESS, FITNESS_LABEL),
            rule(&RECREATIONAL_COMPONENTS, RECREATIONAL_COMPONENTS_LABEL),
            rule(&RECREATIONAL_CONSUMABLES, RECREATIONAL_CONSUMABLES_LABEL),
        ],
        fallback: RECREATIONAL_STORAGE_LABEL,
    },
    RuleBlock {
        category: "Sailing",
        rules: &[
            rule(&SAIL_CANVAS, SAILS_CANVAS_LABEL),
            rule(&RUNNING_RIGGING, RUNNING_RIGGING_LABEL),
            rule(&STANDING_RIGGING, STANDING_RIGGING_LABEL),
            rule(&WINCH_DECK, WINCH_DECK_LABEL),
            rule(&SAILING_CONSUMABLES, SAILING_CONSUMABLES_LABEL),
            rule(&SAIL_REPAIR, SAIL_REPAIR_LABEL),
        ],
        fallback: SAILING_CONSUMABLES_LABEL,
    },
    RuleBlock {
        category: "Safety",
        rules: &[
            rule(&FIRE_SAFETY, FIRE_SAFETY_LABEL),
            rule(&RESCUE_SAFETY, RESCUE_SAFETY_LABEL),
        ],
        fallback: FIRST_AID_LABEL,
    },
];
