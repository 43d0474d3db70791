mod common;

use common::{approx_eq, Fixture, VOCAB};
use wordmaze::core::Embedding;
use wordmaze::storage::source::{ideal_size, parse_line};
use wordmaze::storage::{Reconcile, WordStore};

#[test]
fn loads_words_and_negations() {
	let fx = Fixture::new("load");
	let settings = fx.settings("dog 1.0 0.0\ncat 0.0 1.0\n", 1, 2);

	let (store, outcome) = WordStore::open_reconciled(&settings).unwrap();

	assert_eq!(outcome, Reconcile::Rebuilt { previous: 0, size: 4, batches: 2 });
	assert_eq!(store.size(), 4);
	let vectors = store.get_embeddings(&["dog", "-dog", "cat", "-cat"]).unwrap();
	assert_eq!(vectors[0].as_slice(), &[1.0, 0.0]);
	assert_eq!(vectors[1].as_slice(), &[-1.0, -0.0]);
	assert_eq!(vectors[2].as_slice(), &[0.0, 1.0]);
	assert_eq!(vectors[3].as_slice(), &[-0.0, -1.0]);
}

#[test]
fn negated_vectors_are_exact_inverses() {
	let fx = Fixture::new("inverse");
	let store = fx.store();

	for line in VOCAB.lines() {
		let word = line.split_whitespace().next().unwrap();
		let pos = store.get_embedding(word).unwrap();
		let neg = store.get_embedding(&format!("-{}", word)).unwrap();
		assert_eq!(neg, -&pos, "negation of {}", word);
	}
}

#[test]
fn only_the_first_batches_are_loaded() {
	let fx = Fixture::new("cap");
	let settings = fx.settings("dog 1 0\ncat 0 1\nfish 1 1\nwhale 2 1\n", 1, 2);

	let store = WordStore::open(&settings).unwrap();

	assert_eq!(store.size(), 4);
	assert!(store.is_valid_word("cat"));
	assert!(!store.is_valid_word("fish"));
	assert!(!store.is_valid_word("-whale"));
}

#[test]
fn inserts_once_per_batch_of_lines() {
	let fx = Fixture::new("batches");
	let settings = fx.settings("dog 1 0\ncat 0 1\nfish 1 1\nwhale 2 1\nking 1 2\n", 2, 10);

	let (store, outcome) = WordStore::open_reconciled(&settings).unwrap();

	assert_eq!(outcome, Reconcile::Rebuilt { previous: 0, size: 10, batches: 3 });
	assert_eq!(store.size(), 10);
}

#[test]
fn batch_of_skipped_lines_is_not_inserted() {
	let fx = Fixture::new("skipped-batch");
	let settings = fx.settings("dog 1 0\ncat 0 1\n, 1 1\n. 0 1\nfish 1 1\n", 2, 10);

	let (store, outcome) = WordStore::open_reconciled(&settings).unwrap();

	assert_eq!(outcome, Reconcile::Rebuilt { previous: 0, size: 6, batches: 2 });
	assert!(store.is_valid_word("-fish"));
}

#[test]
fn skips_non_alphanumeric_and_blank_lines() {
	let fx = Fixture::new("skip");
	let settings = fx.settings("dog 1 0\n, 0.5 0.5\n\nnew-york 1 1\ncat 0 1\n", 2, 3);

	assert_eq!(ideal_size(&settings).unwrap(), 4);
	let store = WordStore::open(&settings).unwrap();

	assert_eq!(store.size(), 4);
	assert!(!store.is_valid_word(","));
	assert!(!store.is_valid_word("new-york"));
}

#[test]
fn short_file_is_read_to_the_end() {
	let fx = Fixture::new("short");
	let settings = fx.settings("dog 1 0\n", 8192, 2);

	assert_eq!(ideal_size(&settings).unwrap(), 2);
	assert_eq!(WordStore::open(&settings).unwrap().size(), 2);
}

#[test]
fn second_validation_does_not_rebuild() {
	let fx = Fixture::new("validate");
	let settings = fx.settings(VOCAB, 4, 4);

	let (mut store, first) = WordStore::open_reconciled(&settings).unwrap();
	assert!(matches!(first, Reconcile::Rebuilt { .. }));

	let second = store.validate_or_rebuild().unwrap();
	assert_eq!(second, Reconcile::Consistent { size: 16 });
}

#[test]
fn store_persists_across_opens() {
	let fx = Fixture::new("persist");
	let settings = fx.settings(VOCAB, 4, 4);

	drop(WordStore::open(&settings).unwrap());
	let (store, outcome) = WordStore::open_reconciled(&settings).unwrap();

	assert_eq!(outcome, Reconcile::Consistent { size: 16 });
	assert!(approx_eq(store.get_embedding("whale").unwrap().as_slice(), &[1.0, 0.0, 1.0, 0.0]));
}

#[test]
fn size_mismatch_triggers_full_rebuild() {
	let fx = Fixture::new("mismatch");
	let settings = fx.settings(VOCAB, 4, 4);
	drop(WordStore::open(&settings).unwrap());

	// Source file changes underneath the persisted collection
	fx.write_embeddings("dog 1 0 0 0\ncat 0 1 0 0\n");
	let (store, outcome) = WordStore::open_reconciled(&settings).unwrap();

	assert_eq!(outcome, Reconcile::Rebuilt { previous: 16, size: 4, batches: 1 });
	assert!(!store.is_valid_word("whale"));
}

#[test]
fn corrupt_collection_file_is_rebuilt() {
	let fx = Fixture::new("corrupt");
	let settings = fx.settings(VOCAB, 4, 4);
	drop(WordStore::open(&settings).unwrap());

	std::fs::write(settings.db_dir.join("Words.msgpack"), b"not msgpack").unwrap();
	let (store, outcome) = WordStore::open_reconciled(&settings).unwrap();

	assert_eq!(outcome, Reconcile::Rebuilt { previous: 0, size: 16, batches: 2 });
	assert_eq!(store.size(), 16);
}

#[test]
fn get_embeddings_preserves_request_order() {
	let fx = Fixture::new("order");
	let store = fx.store();

	let vectors = store.get_embeddings(&["huge", "-dog", "cat", "huge"]).unwrap();

	assert_eq!(vectors.len(), 4);
	assert_eq!(vectors[0].as_slice(), &[0.0, 0.0, 1.0, 0.0]);
	assert_eq!(vectors[1].as_slice(), &[-1.0, -0.0, -0.0, -0.0]);
	assert_eq!(vectors[2].as_slice(), &[0.0, 1.0, 0.0, 0.0]);
	assert_eq!(vectors[3], vectors[0]);
}

#[test]
fn unknown_word_is_an_error() {
	let fx = Fixture::new("unknown");
	let store = fx.store();

	let err = store.get_embeddings(&["dog", "zebra"]).unwrap_err();
	assert!(err.to_string().contains("zebra"));
	assert!(!store.is_valid_word("Dog"));
}

#[test]
fn query_returns_nearest_first() {
	let fx = Fixture::new("query");
	let store = fx.store();

	let hits = store.query_neighbors(&Embedding::new(vec![1.0, 0.0, 0.9, 0.0]), 3);

	assert_eq!(hits.len(), 3);
	assert_eq!(hits[0].id, "whale");
	assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
	assert!(store.query_neighbors(&Embedding::new(vec![1.0, 0.0, 0.0, 0.0]), 0).is_empty());
	assert_eq!(store.query_neighbors(&Embedding::new(vec![1.0, 0.0, 0.0, 0.0]), 100).len(), 16);
}

#[test]
fn malformed_vector_fails_the_load() {
	let fx = Fixture::new("malformed");
	let settings = fx.settings("dog 1 0\ncat 0 abc\n", 8, 1);

	let err = WordStore::open(&settings).err().expect("load should fail");
	assert!(format!("{:#}", err).contains("Line 2"));
}

#[test]
fn non_finite_vector_fails_the_load() {
	let fx = Fixture::new("nan");
	let settings = fx.settings("dog 1 0\ncat 0 1\nbad nan 1\n", 8, 1);

	let err = WordStore::open(&settings).err().expect("load should fail");
	let msg = format!("{:#}", err);
	assert!(msg.contains("Line 3") && msg.contains("bad"), "{}", msg);
}

#[test]
fn dimension_mismatch_fails_the_load() {
	let fx = Fixture::new("dims");
	let settings = fx.settings("dog 1 0\ncat 0 1 1\n", 8, 1);

	assert!(WordStore::open(&settings).is_err());
}

#[test]
fn missing_source_file_is_fatal() {
	let fx = Fixture::new("missing");
	let mut settings = fx.settings(VOCAB, 4, 4);
	settings.embedding_file = fx.dir().join("nope.txt");

	let err = WordStore::open(&settings).err().expect("open should fail");
	assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn parse_line_cases() {
	let entry = parse_line("dog 0.5 -1.5", 7).unwrap().unwrap();
	assert_eq!(entry.line, 7);
	assert_eq!(entry.word, "dog");
	assert_eq!(entry.embedding.as_slice(), &[0.5, -1.5]);

	assert!(parse_line("", 1).unwrap().is_none());
	assert!(parse_line("... 0.1 0.2", 1).unwrap().is_none());
	assert!(parse_line("dog", 1).is_err());
	assert!(parse_line("dog 1 x", 1).is_err());
	assert!(parse_line("dog inf 0", 1).is_err());
	assert!(parse_line("dog 0 -inf", 1).is_err());
	assert!(parse_line("dog NaN 1", 1).is_err());
}
