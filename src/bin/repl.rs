use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use trpg_dice::roll::{MarkdownStringifier, SimpleStringifier, Stringify};
use trpg_dice::skill::{self, apply_attributes, SkillConfig};
use trpg_dice::{EvalConfig, Int, RollContext, UInt};

/// Interactive dice roller.
///
/// `st <attributes>` stores attributes, `ra <skill>` rolls a skill check,
/// `r <expr>` rolls an expression (`d100` when empty), anything else is
/// evaluated as an expression.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Sides for a `d` written without them.
    #[arg(long, default_value_t = trpg_dice::DEFAULT_DIE_SIDES)]
    sides: UInt,

    /// Dice allowed per expression; 0 disables the limit.
    #[arg(long, default_value_t = 1000)]
    max_rolls: UInt,

    /// Critical success threshold for skill checks.
    #[arg(long, default_value_t = 5)]
    critical: Int,

    /// Seed for reproducible rolls.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON object of attribute values to start with.
    #[arg(long)]
    sheet: Option<PathBuf>,

    /// Render results as markdown.
    #[arg(long)]
    markdown: bool,
}

struct Session {
    ctx: RollContext<StdRng>,
    skill: SkillConfig,
    sheet: HashMap<String, Int>,
    stringifier: Box<dyn Stringify>,
}

impl Session {
    fn handle(&mut self, line: &str) -> String {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        match command {
            "st" => {
                let mut audit = Vec::new();
                let parsed = skill::parse_attributes(&mut self.ctx, rest, Some(&mut audit));
                apply_attributes(&mut self.sheet, &parsed);
                let stored = parsed
                    .iter()
                    .map(|(name, value)| format!("{}={}", name, value))
                    .collect::<Vec<_>>()
                    .join(" ");
                if audit.is_empty() {
                    format!("stored {}", stored)
                } else {
                    let records = audit
                        .iter()
                        .map(|r| self.stringifier.str_record(r))
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("stored {} [{}]", stored, records)
                }
            }
            "ra" => {
                let result = skill::resolve(&mut self.ctx, &self.skill, rest, &self.sheet);
                let roll = self.stringifier.str_total(result.roll.into());
                let records = result
                    .records
                    .iter()
                    .map(|r| self.stringifier.str_record(r))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{} {}/{}: {} [{}]", result.skill_name, roll, result.target, result.tier, records)
                    .trim_start()
                    .to_owned()
            }
            "r" if rest.is_empty() => self.roll("d100"),
            "r" => self.roll(&rest.to_lowercase()),
            _ => self.roll(line),
        }
    }

    fn roll(&mut self, expr: &str) -> String {
        let mut audit = Vec::new();
        match self.ctx.eval_str(expr, Some(&mut audit)) {
            Ok(total) => format!("= {}", self.stringifier.str_roll(total, &audit)),
            Err(why) => format!("Error: {}", why),
        }
    }
}

fn load_sheet(path: &Path) -> Result<HashMap<String, Int>, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trpg_dice=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let roller = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = EvalConfig {
        default_die_sides: args.sides,
        max_rolls: Some(args.max_rolls).filter(|&max| max > 0),
    };
    let sheet = match &args.sheet {
        Some(path) => load_sheet(path)?,
        None => HashMap::new(),
    };
    tracing::info!(?config, attributes = sheet.len(), "starting repl");

    let mut session = Session {
        ctx: RollContext::new(config, roller),
        skill: SkillConfig {
            critical_threshold: args.critical,
        },
        sheet,
        stringifier: if args.markdown {
            Box::new(MarkdownStringifier)
        } else {
            Box::new(SimpleStringifier)
        },
    };

    print!("> ");
    io::stdout().flush()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            println!("{}", session.handle(line));
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u64) -> Session {
        Session {
            ctx: RollContext::new(EvalConfig::default(), StdRng::seed_from_u64(seed)),
            skill: SkillConfig::default(),
            sheet: HashMap::new(),
            stringifier: Box::new(SimpleStringifier),
        }
    }

    #[test]
    fn test_roll_command_ignores_case() {
        let upper = session(7).handle("r 1D6");
        let lower = session(7).handle("r 1d6");
        assert!(upper.starts_with("= "), "{}", upper);
        assert_eq!(upper, lower);
        assert!(session(7).handle("1D6").starts_with("Error: "));
    }

    #[test]
    fn test_empty_roll_command_rolls_percentile() {
        let reply = session(7).handle("r");
        assert!(reply.contains("D100="), "{}", reply);
    }

    #[test]
    fn test_stored_attributes_feed_skill_checks() {
        let mut session = session(7);
        assert_eq!(session.handle("st strength70"), "stored strength=70");
        let reply = session.handle("ra strength");
        assert!(reply.starts_with("strength "), "{}", reply);
        assert!(reply.contains("/70: "), "{}", reply);
    }
}
