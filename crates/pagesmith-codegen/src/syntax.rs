//! Syntax check for generated TSX modules.

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

/// Parse `source` as TSX and report the parser's diagnostics, if any.
pub fn check_tsx(source: &str) -> Result<(), String> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let message = ret
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(if message.is_empty() {
            "parser aborted".to_string()
        } else {
            message
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_component() {
        let source = r#"import React from 'react';

interface HeroProps {
  title: string;
}

export default function Hero(props: HeroProps) {
  return (
    <section className="py-4">
      {props.title}
    </section>
  );
}
"#;
        assert!(check_tsx(source).is_ok());
    }

    #[test]
    fn rejects_broken_jsx() {
        let source = "export default function X() { return (<div><span></div>); }";
        assert!(check_tsx(source).is_err());
    }
}
