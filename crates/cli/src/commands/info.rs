use clap::Parser;
use eyre::{eyre, Result};
use fibbench_core::FibMethod;
use itertools::Itertools;
use strum::IntoEnumIterator;

#[derive(Parser)]
#[command(name = "info", about = "Show algorithm complexity")]
pub struct InfoCmd {
    #[arg(short, long, default_value = "all", help = "Algorithm name, or \"all\"")]
    method: String,
}

impl InfoCmd {
    pub fn run(&self) -> Result<()> {
        let methods = select_methods(&self.method)?;
        println!("| algorithm | time | space | exact |");
        println!("| -- | -- | -- | -- |");
        for method in methods {
            println!(
                "| {} | {} | {} | {} |",
                method.name(),
                method.time_complexity(),
                method.space_complexity(),
                if method.is_exact() { "yes" } else { "small n only" }
            );
        }
        Ok(())
    }
}

fn select_methods(name: &str) -> Result<Vec<FibMethod>> {
    if name.eq_ignore_ascii_case("all") {
        return Ok(FibMethod::iter().collect());
    }
    let method = name.parse::<FibMethod>().map_err(|_| {
        eyre!(
            "unknown method {:?}, expected one of: all, {}",
            name,
            FibMethod::iter().map(|m| m.name()).join(", ")
        )
    })?;
    Ok(vec![method])
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("all", 7)]
    #[test_case("ALL", 7)]
    #[test_case("memo", 1)]
    #[test_case("matrix", 1)]
    #[test_case("closed_form", 1)]
    fn test_select_methods(name: &str, count: usize) {
        assert_eq!(select_methods(name).unwrap().len(), count);
    }

    #[test]
    fn test_unknown_method() {
        let err = select_methods("bogosort").unwrap_err();
        assert!(err.to_string().contains("fast_doubling"));
        assert!(err.to_string().contains("recursive_memo"));
    }
}
