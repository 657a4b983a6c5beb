//! Trellis CLI
//!
//! Build CSS selectors and inspect rectangles from the terminal.

use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use trellis_common::warning::{set_color_enabled, warn_once};
use trellis_css::{FragmentKind, OrderError, SelectorBuilder};
use trellis_objects::{Rectangle, from_json, get_json};

/// Trellis: selector builder and rectangle helpers
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Build a compound selector (parts are appended in the order given)
    trellis selector element=a 'attr=href$=".png"' pseudo-class=focus

    # Out-of-order parts are rejected
    trellis selector class=nav id=main

    # Rectangle area, or its JSON form
    trellis rect 10 20
    trellis rect 10 20 --json

    # Decode a rectangle from JSON
    trellis rect --from-json '{"width":10,"height":20}'
"#)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a compound selector from KIND=VALUE parts
    Selector {
        /// element, id, class, attr, pseudo-class or pseudo-element, each
        /// followed by `=` and its value
        #[arg(value_name = "KIND=VALUE", required = true)]
        parts: Vec<Part>,
    },

    /// Print a rectangle's area, or its JSON form
    #[command(allow_negative_numbers = true)]
    Rect {
        /// Rectangle width
        #[arg(required_unless_present = "from_json")]
        width: Option<f64>,

        /// Rectangle height
        #[arg(required_unless_present = "from_json")]
        height: Option<f64>,

        /// Print the rectangle as JSON instead of its area
        #[arg(long)]
        json: bool,

        /// Read the rectangle from JSON text
        #[arg(long, value_name = "JSON", conflicts_with_all = ["width", "height"])]
        from_json: Option<String>,
    },
}

type Append = fn(SelectorBuilder, &str) -> Result<SelectorBuilder, OrderError>;

/// One `KIND=VALUE` selector part from the command line.
#[derive(Debug, Clone)]
struct Part {
    kind: FragmentKind,
    append: Append,
    value: String,
}

impl FromStr for Part {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split on the first `=` only; attribute values carry their own.
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected KIND=VALUE, got '{s}'"))?;

        let (kind, append): (FragmentKind, Append) = match name {
            "element" => (FragmentKind::Element, SelectorBuilder::element),
            "id" => (FragmentKind::Id, SelectorBuilder::id),
            "class" => (FragmentKind::Class, SelectorBuilder::class),
            "attr" | "attribute" => (FragmentKind::Attribute, SelectorBuilder::attr),
            "pseudo-class" => (FragmentKind::PseudoClass, SelectorBuilder::pseudo_class),
            "pseudo-element" => (FragmentKind::PseudoElement, SelectorBuilder::pseudo_element),
            other => return Err(format!("unknown selector part '{other}'")),
        };

        Ok(Self {
            kind,
            append,
            value: value.to_string(),
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let color = !cli.no_color;
    set_color_enabled(color);

    match cli.command {
        Command::Selector { parts } => {
            let selector = build_selector(&parts)?;
            if color {
                println!("{}", selector.green());
            } else {
                println!("{selector}");
            }
        }
        Command::Rect {
            width,
            height,
            json,
            from_json: source,
        } => {
            let output = rect_output(width, height, json, source.as_deref())?;
            if color && !json {
                println!("{}", output.cyan());
            } else {
                println!("{output}");
            }
        }
    }

    Ok(())
}

/// Append every part in order and render the result.
fn build_selector(parts: &[Part]) -> Result<String> {
    let mut builder = SelectorBuilder::new();
    for part in parts {
        if part.value.is_empty() {
            warn_once("CLI", &format!("empty value for {} part", part.kind));
        }
        builder = (part.append)(builder, &part.value)
            .with_context(|| format!("cannot append {} '{}'", part.kind, part.value))?;
    }
    Ok(builder.into_string())
}

/// Resolve the rectangle from its sides or from JSON, and render either its
/// area or its JSON form.
fn rect_output(
    width: Option<f64>,
    height: Option<f64>,
    json: bool,
    source: Option<&str>,
) -> Result<String> {
    let rect = match source {
        Some(text) => from_json::<Rectangle>(text).context("invalid rectangle JSON")?,
        None => Rectangle::new(width.unwrap_or_default(), height.unwrap_or_default()),
    };
    if rect.width < 0.0 || rect.height < 0.0 {
        warn_once("CLI", "rectangle has a negative side; area will be negative");
    }

    if json {
        Ok(get_json(&rect)?)
    } else {
        Ok(rect.area().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use trellis_common::warning::recorded_warnings;
    use trellis_objects::JsonError;

    fn parts(args: &[&str]) -> Vec<Part> {
        args.iter().map(|arg| arg.parse().unwrap()).collect()
    }

    #[test]
    fn test_parse_part_splits_on_first_equals() {
        let part: Part = r#"attr=href$=".png""#.parse().unwrap();
        assert_eq!(part.kind, FragmentKind::Attribute);
        assert_eq!(part.value, r#"href$=".png""#);
    }

    #[test]
    fn test_parse_part_rejects_unknown_kind() {
        assert!("tag=div".parse::<Part>().is_err());
        assert!("div".parse::<Part>().is_err());
    }

    #[test]
    fn test_build_selector_in_given_order() {
        let selector = build_selector(&parts(&[
            "element=a",
            r#"attr=href$=".png""#,
            "pseudo-class=focus",
        ]))
        .unwrap();
        assert_eq!(selector, r#"a[href$=".png"]:focus"#);
    }

    #[test]
    fn test_build_selector_reports_order_error() {
        let err = build_selector(&parts(&["class=nav", "id=main"])).unwrap_err();
        assert_eq!(err.to_string(), "cannot append id 'main'");
        assert!(err.downcast_ref::<OrderError>().is_some());
    }

    // Rect Tests

    #[test]
    fn test_rect_accepts_negative_sides() {
        let cli = Cli::try_parse_from(["trellis", "rect", "-5", "3"]).unwrap();
        let Command::Rect { width, height, .. } = cli.command else {
            panic!("expected rect subcommand");
        };
        assert_eq!(width, Some(-5.0));
        assert_eq!(height, Some(3.0));
    }

    #[test]
    fn test_rect_negative_side_warns() {
        assert_eq!(rect_output(Some(-5.0), Some(3.0), false, None).unwrap(), "-15");
        assert!(recorded_warnings().contains(
            &"[CLI] rectangle has a negative side; area will be negative".to_string()
        ));
    }

    #[test]
    fn test_rect_area() {
        assert_eq!(rect_output(Some(10.0), Some(20.0), false, None).unwrap(), "200");
        assert_eq!(rect_output(Some(2.5), Some(2.0), false, None).unwrap(), "5");
    }

    #[test]
    fn test_rect_json() {
        let output = rect_output(Some(10.0), Some(20.0), true, None).unwrap();
        assert_eq!(output, r#"{"width":10.0,"height":20.0}"#);
    }

    #[test]
    fn test_rect_from_json() {
        let source = r#"{"width":10,"height":20}"#;
        assert_eq!(rect_output(None, None, false, Some(source)).unwrap(), "200");
        assert_eq!(
            rect_output(None, None, true, Some(source)).unwrap(),
            r#"{"width":10.0,"height":20.0}"#
        );
    }

    #[test]
    fn test_rect_from_invalid_json() {
        let err = rect_output(None, None, false, Some("{ width: 10")).unwrap_err();
        assert_eq!(err.to_string(), "invalid rectangle JSON");
        assert!(err.downcast_ref::<JsonError>().is_some());
    }

    #[test]
    fn test_rect_from_json_conflicts_with_sides() {
        let err = Cli::try_parse_from(["trellis", "rect", "1", "2", "--from-json", "{}"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_rect_requires_sides_or_json() {
        let err = Cli::try_parse_from(["trellis", "rect"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from(["trellis", "rect", "--from-json", "{}"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Rect { from_json: Some(_), width: None, height: None, .. }
        ));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
