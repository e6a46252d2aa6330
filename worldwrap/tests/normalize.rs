use predicates::str;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_utilities::*;

#[test]
fn normalize_to_stdout() {
	let output = worldwrap_cmd()
		.args(["normalize", "--precision", "3"])
		.arg(get_testdata("mercator.geojson"))
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	let document: serde_json::Value = serde_json::from_slice(&output).unwrap();
	assert_eq!(document["features"][0]["geometry"]["coordinates"], json!([13.4, 52.3]));
	assert_eq!(document["features"][0]["id"], json!("berlin"));
	assert_eq!(document["features"][3]["geometry"], serde_json::Value::Null);
	assert_eq!(document["crs"]["properties"]["name"], json!("urn:ogc:def:crs:EPSG::3857"));
}

#[test]
fn normalize_to_file() {
	let (_dir, output) = get_temp_output("normalized.geojson");
	worldwrap_cmd()
		.arg("normalize")
		.arg(get_testdata("degrees.geojson"))
		.arg(&output)
		.assert()
		.success()
		.stdout(str::is_empty());

	assert_eq!(read_json(&output), read_json(&get_testdata("degrees.geojson")));
}

#[test]
fn malformed_input_is_kept_with_a_warning() {
	let (_dir, output) = get_temp_output("kept.geojson");
	worldwrap_cmd()
		.arg("normalize")
		.arg(get_testdata("malformed.geojson"))
		.arg(&output)
		.assert()
		.success()
		.stderr(str::contains("could not normalize document"))
		.stderr(str::contains("feature 1"));

	assert_eq!(read_json(&output), read_json(&get_testdata("malformed.geojson")));
}

#[test]
fn quiet_suppresses_the_warning() {
	worldwrap_cmd()
		.args(["normalize", "-q"])
		.arg(get_testdata("malformed.geojson"))
		.assert()
		.success()
		.stderr(str::is_empty());
}

#[test]
fn invalid_json_fails() {
	worldwrap_cmd()
		.arg("normalize")
		.arg(get_testdata("invalid.json"))
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("reading"));
}
