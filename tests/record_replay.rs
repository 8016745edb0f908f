//! Record-replay round-trip integration test.
//!
//! Proves that the record/replay system works end-to-end:
//! 1. Build a cassette with `CassetteRecorder` (exercises fs and llm).
//! 2. Replay it through `ServiceContext::replaying()`.
//! 3. Assert the replayed outputs match what was recorded.
//! 4. Replay a second time and assert determinism.

use std::path::Path;

use serde_json::json;

use codedoc::cassette::recorder::CassetteRecorder;
use codedoc::context::ServiceContext;
use codedoc::ports::llm::CompletionRequest;

/// Exercises the fs and llm ports on the given context, returning a
/// snapshot of all outputs for comparison.
async fn exercise_ports(ctx: &ServiceContext) -> (String, bool, Vec<String>, String) {
    let content = ctx.fs.read_to_string(Path::new("/project/app/a.py")).unwrap();
    let is_dir = ctx.fs.is_dir(Path::new("/project/app"));
    let names = ctx.fs.list_dir(Path::new("/project/app")).unwrap();
    let request = CompletionRequest {
        model: "test-model".into(),
        prompt: "describe".into(),
        max_tokens: 64,
        temperature: 0.9,
    };
    let completion = ctx.llm.complete(&request).await.unwrap();
    (content, is_dir, names, completion.text)
}

#[tokio::test]
async fn record_then_replay_produces_identical_outputs() {
    let dir = std::env::temp_dir().join("codedoc_record_replay_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("roundtrip.cassette.yaml");

    // --- Phase 1: Record interactions ---
    // Simulates what the recording adapters capture by building a cassette
    // with known interactions for fs and llm.
    let mut recorder = CassetteRecorder::new(&cassette_path, "roundtrip-test");

    recorder.record(
        "fs",
        "read_to_string",
        json!({"path": "/project/app/a.py"}),
        json!({"ok": "def foo():\n    return 1\n"}),
    );
    recorder.record("fs", "is_dir", json!({"path": "/project/app"}), json!(true));
    recorder.record(
        "fs",
        "list_dir",
        json!({"path": "/project/app"}),
        json!({"ok": ["a.py", "b.py"]}),
    );
    recorder.record(
        "llm",
        "complete",
        json!({"model": "test-model", "prompt": "describe"}),
        json!({"ok": {
            "text": "A tiny function.",
            "prompt_tokens": 42,
            "completion_tokens": 4
        }}),
    );

    recorder.write().expect("recording should succeed");

    let expected_content = "def foo():\n    return 1\n";
    let expected_names = vec!["a.py".to_string(), "b.py".to_string()];
    let expected_text = "A tiny function.";

    // --- Phase 2: Replay and verify identical outputs ---
    let ctx1 = ServiceContext::replaying(&cassette_path).unwrap();
    let (content1, is_dir1, names1, text1) = exercise_ports(&ctx1).await;

    assert_eq!(content1, expected_content, "fs read_to_string replay mismatch");
    assert!(is_dir1, "fs is_dir replay mismatch");
    assert_eq!(names1, expected_names, "fs list_dir replay mismatch");
    assert_eq!(text1, expected_text, "llm complete replay mismatch");

    // --- Phase 3: Replay a second time — determinism check ---
    let ctx2 = ServiceContext::replaying(&cassette_path).unwrap();
    let (content2, is_dir2, names2, text2) = exercise_ports(&ctx2).await;

    assert_eq!(content1, content2, "determinism: fs read outputs differ between replays");
    assert_eq!(is_dir1, is_dir2, "determinism: fs is_dir outputs differ between replays");
    assert_eq!(names1, names2, "determinism: fs list_dir outputs differ between replays");
    assert_eq!(text1, text2, "determinism: llm outputs differ between replays");

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn replay_from_per_port_cassettes_matches_monolithic() {
    use codedoc::cassette::config::CassetteConfig;

    let dir = std::env::temp_dir().join("codedoc_record_replay_per_port_test");
    std::fs::create_dir_all(&dir).unwrap();

    let fs_path = dir.join("fs.cassette.yaml");
    let mut fs_rec = CassetteRecorder::new(&fs_path, "fs-port");
    fs_rec.record(
        "fs",
        "read_to_string",
        json!({"path": "/hello.py"}),
        json!({"ok": "print('hello')\n"}),
    );
    fs_rec.write().unwrap();

    let llm_path = dir.join("llm.cassette.yaml");
    let mut llm_rec = CassetteRecorder::new(&llm_path, "llm-port");
    llm_rec.record(
        "llm",
        "complete",
        json!({}),
        json!({"ok": {
            "text": "Prints a greeting.",
            "prompt_tokens": 20,
            "completion_tokens": 4
        }}),
    );
    llm_rec.write().unwrap();

    let config = CassetteConfig { fs: Some(fs_path), llm: Some(llm_path) };
    let ctx = ServiceContext::replaying_from(&config).unwrap();

    assert_eq!(ctx.fs.read_to_string(Path::new("/hello.py")).unwrap(), "print('hello')\n");
    let request = CompletionRequest {
        model: "test-model".into(),
        prompt: "describe".into(),
        max_tokens: 64,
        temperature: 0.9,
    };
    assert_eq!(ctx.llm.complete(&request).await.unwrap().text, "Prints a greeting.");

    let _ = std::fs::remove_dir_all(&dir);
}
