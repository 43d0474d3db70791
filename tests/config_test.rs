mod common;

use common::Fixture;
use wordmaze::config::{preset, FileConfig, Overrides, Settings, BATCH_SIZE, LOAD_N_BATCHES, SEARCH_WIDTH};

#[test]
fn defaults_use_the_whale_preset() {
	let settings = Settings::default();

	assert_eq!(settings.start, "dog");
	assert_eq!(settings.goal, "whale");
	assert_eq!(settings.guesses, vec!["-cat", "huge", "dolphin"]);
	assert_eq!(settings.search_width, SEARCH_WIDTH);
	assert_eq!(settings.store.line_cap(), BATCH_SIZE * LOAD_N_BATCHES);
}

#[test]
fn presets_are_case_insensitive() {
	let royal = preset("ROYAL").unwrap();
	assert_eq!((royal.start, royal.goal), ("king", "queen"));
	assert!(preset("nope").is_none());
}

#[test]
fn command_line_overrides_win() {
	let overrides = Overrides {
		preset: Some("royal".into()),
		goal: Some("Princess".into()),
		db_dir: Some("/tmp/elsewhere".into()),
		..Default::default()
	};

	let settings = Settings::resolve(&overrides).unwrap();

	assert_eq!(settings.start, "king");
	assert_eq!(settings.goal, "princess");
	assert!(settings.guesses.is_empty());
	assert_eq!(settings.store.db_dir.to_str(), Some("/tmp/elsewhere"));
}

#[test]
fn unknown_preset_is_an_error() {
	let overrides = Overrides {
		preset: Some("ocean".into()),
		..Default::default()
	};

	let err = Settings::resolve(&overrides).unwrap_err();
	assert!(err.to_string().contains("whale"));
}

#[test]
fn config_file_layer() {
	let fx = Fixture::new("config");
	let path = fx.dir().join("wordmaze.json");
	std::fs::write(
		&path,
		r#"{ "preset": "royal", "search_width": 100, "progress_exponent": 0.5, "guesses": ["-man", "woman"] }"#,
	)
	.unwrap();

	let settings = Settings::resolve(&Overrides {
		config: Some(path),
		..Default::default()
	})
	.unwrap();

	assert_eq!(settings.start, "king");
	assert_eq!(settings.search_width, 100);
	assert_eq!(settings.progress_exponent, 0.5);
	assert_eq!(settings.guesses, vec!["-man", "woman"]);
}

#[test]
fn invalid_config_values_are_rejected() {
	let fx = Fixture::new("config-bad");
	let typo = fx.dir().join("typo.json");
	std::fs::write(&typo, r#"{ "serch_width": 10 }"#).unwrap();
	assert!(FileConfig::load(&typo).is_err());

	let zero = fx.dir().join("zero.json");
	std::fs::write(&zero, r#"{ "search_width": 0 }"#).unwrap();
	assert!(Settings::resolve(&Overrides {
		config: Some(zero),
		..Default::default()
	})
	.is_err());
}
