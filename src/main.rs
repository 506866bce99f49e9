use clap::Parser;
use inventory_reclass::{cli, config, error, loader, logging, pipeline};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use inventory_reclass_common::classify;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Reclassify { input, sheet, output, zip } => {
            println!("📦 inventory-reclass - 再分類\n");
            println!("入力: {}", input.display());
            let report =
                pipeline::run_with_config(input, sheet, output, zip, &Config::config_path()?)?;

            println!("\nサマリー:");
            println!("  総行数: {}", report.summary.total_rows);
            println!("  変更行数: {} ({}%)", report.summary.changed_rows, report.summary.changed_percent);
            println!("  空のv5bサブカテゴリ: {}", report.summary.blank_sub_categories);
            println!("  使用v5bカテゴリ数: {}", report.summary.categories_used);
            println!("  移動先グループ数: {}", report.shift_groups);

            println!("\n✅ 完了");
        }

        Commands::Sheets { input } => {
            for name in loader::sheet_names(&input)? {
                println!("{}", name);
            }
        }

        Commands::Classify { category, sub_category, sub_sub_category, description } => {
            let description = description.join(" ");
            let result = classify(&category, &sub_category, &description, &sub_sub_category);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Config { set_fields, zip_by_default, reset, show } => {
            // 壊れた設定ファイルでも --reset できるよう、リセット時は読み込まない
            let mut config = if reset { Config::default() } else { Config::load()? };
            let changed = reset || set_fields.is_some() || zip_by_default.is_some();

            if let Some(fields) = set_fields {
                config.set_description_fields(&fields)?;
            }
            if let Some(value) = zip_by_default {
                config.zip_by_default = value;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  検索用フィールド: {}", config.description_fields.join(", "));
                println!("  ZIP作成: {}", if config.zip_by_default { "常に作成" } else { "--zip指定時のみ" });
            }
        }
    }

    Ok(())
}
