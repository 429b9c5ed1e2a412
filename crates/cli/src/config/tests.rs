use std::io::Write;

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{ConfigError, load, parse};
use crate::scenario::Content;

const SCENARIO: &str = r#"
[[resource]]
name = "arena"
capacity = 64

[[resource]]
name = "heap"

[[value]]
name = "count"
resource = "arena"
initial = 3

[[value]]
name = "label"
resource = "heap"
initial = "draft"

[[value]]
name = "scratch"
initial = 0

[[step]]
value = "count"
set = 4

[[step]]
value = "label"
set = "final"

[transaction]
fail_at = 1
"#;

#[test]
fn parses_a_full_scenario() {
	let scenario = parse(SCENARIO).unwrap();

	let names: Vec<_> = scenario.slots().iter().map(|slot| slot.name()).collect();
	assert_eq!(names, ["count", "label", "scratch"]);
	let resources: Vec<_> = scenario.slots().iter().map(|slot| slot.resource_name()).collect();
	assert_eq!(resources, ["arena", "heap", "default"]);
	assert_eq!(scenario.slots()[1].content(), &Content::Text("draft".into()));

	assert_eq!(scenario.steps().len(), 2);
	assert_eq!(scenario.steps()[1].slot, 1);
	assert_eq!(scenario.steps()[0].set, Content::Int(4));
	assert_eq!(scenario.fail_at(), Some(1));
}

#[test]
fn empty_file_is_an_empty_scenario() {
	let scenario = parse("").unwrap();
	assert!(scenario.slots().is_empty());
	assert!(scenario.steps().is_empty());
	assert_eq!(scenario.fail_at(), None);
}

#[rstest]
#[case::duplicate_resource(
	"[[resource]]\nname = \"a\"\n[[resource]]\nname = \"a\"\n",
	"duplicate resource name: a"
)]
#[case::duplicate_value(
	"[[value]]\nname = \"x\"\ninitial = 1\n[[value]]\nname = \"x\"\ninitial = 2\n",
	"duplicate value name: x"
)]
#[case::unknown_resource(
	"[[value]]\nname = \"x\"\nresource = \"nowhere\"\ninitial = 1\n",
	"value `x` uses undeclared resource `nowhere`"
)]
#[case::unknown_value(
	"[[step]]\nvalue = \"ghost\"\nset = 1\n",
	"step 0 sets undeclared value `ghost`"
)]
#[case::kind_mismatch(
	"[[value]]\nname = \"x\"\ninitial = 1\n[[step]]\nvalue = \"x\"\nset = \"one\"\n",
	"step 0 sets text content on integer value `x`"
)]
fn validation_errors(#[case] text: &str, #[case] message: &str) {
	let err = parse(text).unwrap_err();
	assert_eq!(err.to_string(), message);
}

#[rstest]
#[case::unknown_field("[[value]]\nname = \"x\"\ninitial = 1\ncolour = \"red\"\n")]
#[case::float_content("[[value]]\nname = \"x\"\ninitial = 1.5\n")]
#[case::missing_initial("[[value]]\nname = \"x\"\n")]
#[case::syntax("[[value]\n")]
fn malformed_files_are_toml_errors(#[case] text: &str) {
	assert!(matches!(parse(text), Err(ConfigError::Toml(_))));
}

#[test]
fn loads_from_disk() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(SCENARIO.as_bytes()).unwrap();

	let scenario = load(file.path()).unwrap();
	assert_eq!(scenario.slots().len(), 3);
}

#[test]
fn missing_file_is_an_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("absent.toml");

	let err = load(&path).unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }));
	assert!(err.to_string().contains("absent.toml"));
}
