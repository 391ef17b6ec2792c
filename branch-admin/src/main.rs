use branch_admin::{AutoConfirm, BranchAdmin, setup_environment};
use std::sync::Arc;

const USAGE: &str = "usage: branch-admin [list | export <dir> | import <file> | reset]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();
    let password = config.admin_password.clone();

    // 2. 打开存储 (命令行即确认)
    let mut admin = BranchAdmin::open_on_disk(config, Arc::new(AutoConfirm(true)))?;
    tracing::info!(source = ?admin.load_source(), branches = admin.branches().len(), "Store opened");
    admin.sign_in(&password)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["list"] => {
            for row in admin.branch_list("") {
                println!("{}  {}", row.name, row.meta);
            }
        }
        ["export", dir] => {
            let path = admin.export_to_dir(dir).await?;
            println!("{}", path.display());
        }
        ["import", file] => {
            admin.import_file(file).await?;
        }
        ["reset"] => {
            admin.reset_to_demo()?;
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }

    for notice in admin.drain_notices() {
        tracing::info!(level = ?notice.level, "{}", notice.message);
    }
    Ok(())
}
