//! Manifest directory scanning.

use std::fs;

use vamp_descriptor::{LoadError, ManifestHost, PluginHost, SampleType};

const EXAMPLE: &str = r#"{
  "library": "vamp-example-plugins",
  "plugins": [
    {
      "identifier": "zerocrossing",
      "name": "Zero Crossings",
      "maker": "Vamp SDK Example Plugins",
      "outputs": [
        { "identifier": "counts", "name": "Zero Crossing Counts",
          "bins": { "count": 1 }, "quantize_step": 1.0,
          "sample_type": "OneSamplePerStep" }
      ]
    },
    { "identifier": "percussiononsets", "name": "Simple Percussion Onset Detector",
      "input_domain": "FrequencyDomain" }
  ]
}"#;

#[test]
fn scans_json_manifests_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.json"), EXAMPLE).unwrap();
    fs::write(
        dir.path().join("a-lib.json"),
        r#"{ "plugins": [ { "identifier": "tempo", "name": "Tempo" } ] }"#,
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "not a manifest").unwrap();

    let host = ManifestHost::scan([dir.path()]);
    assert_eq!(
        host.list_plugins(),
        vec![
            "a-lib:tempo",
            "vamp-example-plugins:zerocrossing",
            "vamp-example-plugins:percussiononsets",
        ]
    );
    assert!(host.skipped().is_empty());

    let zcr = host
        .load_plugin("vamp-example-plugins:zerocrossing", 44100.0)
        .unwrap();
    assert_eq!(zcr.outputs[0].sample_type, SampleType::OneSamplePerStep);
    assert_eq!(zcr.outputs[0].quantize_step, Some(1.0));
}

#[test]
fn broken_manifests_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.json"), "{ \"plugins\": [ ").unwrap();
    fs::write(dir.path().join("good.json"), EXAMPLE).unwrap();

    let host = ManifestHost::scan([dir.path()]);
    assert_eq!(host.skipped().len(), 1);
    assert_eq!(host.list_plugins().len(), 2);
    assert_eq!(
        host.load_plugin("broken:anything", 44100.0),
        Err(LoadError::NotFound {
            key: "broken:anything".into()
        })
    );
}

#[test]
fn missing_directories_yield_an_empty_host() {
    let dir = tempfile::tempdir().unwrap();
    let host = ManifestHost::scan([dir.path().join("does-not-exist")]);
    assert!(host.list_plugins().is_empty());
}

#[test]
fn later_directories_extend_earlier_libraries() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    fs::write(
        first.path().join("lib.json"),
        r#"{ "plugins": [ { "identifier": "one", "name": "One" } ] }"#,
    )
    .unwrap();
    fs::write(
        second.path().join("lib.json"),
        r#"{ "plugins": [ { "identifier": "two", "name": "Two" } ] }"#,
    )
    .unwrap();

    let host = ManifestHost::scan([first.path(), second.path()]);
    assert_eq!(host.list_plugins(), vec!["lib:one", "lib:two"]);
}

#[test]
fn unrelated_json_files_are_not_libraries() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "name": "web-ui", "version": "1.0.0", "dependencies": {} }"#,
    )
    .unwrap();
    fs::write(dir.path().join("vamp.json"), EXAMPLE).unwrap();

    let host = ManifestHost::scan([dir.path()]);
    assert_eq!(host.skipped(), [dir.path().join("package.json")]);
    assert!(host
        .list_plugins()
        .iter()
        .all(|key| key.starts_with("vamp-example-plugins:")));
    assert_eq!(
        host.load_plugin("package:web-ui", 44100.0),
        Err(LoadError::NotFound {
            key: "package:web-ui".into()
        })
    );
}
