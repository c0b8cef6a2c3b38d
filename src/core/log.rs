use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{GREEN, RED, RESET, YELLOW};

const MAGENTA: &str = "\x1b[35m";
const BLUE: &str = "\x1b[34m";

/// ANSI color by operation name.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "in" | "add" => GREEN,
        "out" | "del" => RED,
        "edit" | "note" | "target" => YELLOW,
        "import" | "export" => BLUE,
        "migration_applied" => MAGENTA,
        _ => RESET,
    }
}

const MAX_OP_WIDTH: usize = 40;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_targets: Vec<String> = entries
            .iter()
            .map(|e| {
                let s = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                truncate(&s, MAX_OP_WIDTH)
            })
            .collect();

        let op_w = op_targets.iter().map(|s| s.chars().count()).max().unwrap_or(10);
        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (e, op_target) in entries.iter().zip(op_targets) {
            // only the operation word is colored
            let color = color_for_operation(&e.operation);
            let visible = op_target.chars().count();
            let colored = match op_target.split_once(' ') {
                Some((op, rest)) => format!("{color}{op}{RESET} {rest}"),
                None => format!("{color}{op_target}{RESET}"),
            };
            let padding = " ".repeat(op_w.saturating_sub(visible));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max - 3).collect();
    out.push_str("...");
    out
}
