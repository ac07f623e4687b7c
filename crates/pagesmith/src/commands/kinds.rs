//! List the section catalog.

use pagesmith_codegen::CATALOG;

/// Run the kinds command.
pub fn run() {
    print!("{}", catalog_table());
}

fn catalog_table() -> String {
    let width = CATALOG.iter().map(|(kind, _)| kind.len()).max().unwrap_or(0);

    let mut out = format!("{:width$}  FAMILY\n", "KIND", width = width);
    for (kind, family) in CATALOG {
        out.push_str(&format!("{:width$}  {}\n", kind, family, width = width));
    }
    out.push_str("\nAny other kind is exported with the generic template.\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_kind() {
        let table = catalog_table();

        assert!(table.starts_with("KIND"));
        for (kind, family) in CATALOG {
            assert!(table.lines().any(|l| l.starts_with(*kind) && l.ends_with(*family)));
        }
    }
}
