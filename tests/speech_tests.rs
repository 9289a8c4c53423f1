use base64::Engine;
use podium::speech::messages::{AudioFrameMessage, WordEventMessage};

#[test]
fn test_audio_frame_serialization() {
    let msg = AudioFrameMessage {
        stream_id: "test-stream".to_string(),
        sequence: 0,
        audio: base64::engine::general_purpose::STANDARD.encode([0u8; 100]),
        sample_rate: 48000,
        encoding: "webm-opus".to_string(),
        language_code: "en-US".to_string(),
        word_time_offsets: true,
        automatic_punctuation: true,
        final_frame: false,
    };

    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains("test-stream"));
    assert!(json.contains("48000"));
    assert!(json.contains("\"final\":false"));
    assert!(json.contains("\"sequence\":0"));

    let deserialized: AudioFrameMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.stream_id, "test-stream");
    assert_eq!(deserialized.sample_rate, 48000);
    assert_eq!(deserialized.encoding, "webm-opus");
    assert!(deserialized.word_time_offsets);
    assert!(!deserialized.final_frame);
}

#[test]
fn test_audio_frame_final_marker() {
    let msg = AudioFrameMessage {
        stream_id: "test-stream".to_string(),
        sequence: 10,
        audio: String::new(), // Empty for final marker
        sample_rate: 48000,
        encoding: "webm-opus".to_string(),
        language_code: "en-US".to_string(),
        word_time_offsets: true,
        automatic_punctuation: true,
        final_frame: true,
    };

    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains("\"final\":true"));

    let deserialized: AudioFrameMessage = serde_json::from_str(&json).unwrap();
    assert!(deserialized.final_frame);
    assert!(deserialized.audio.is_empty());
    assert_eq!(deserialized.sequence, 10);
}

#[test]
fn test_word_event_deserialization() {
    let json = r#"{
        "stream_id": "test-stream",
        "partial": false,
        "words": [
            { "text": "hello", "start_time": 0.2, "end_time": 0.6 },
            { "text": "world", "start_time": 0.7, "end_time": 1.1 }
        ]
    }"#;

    let msg: WordEventMessage = serde_json::from_str(json).unwrap();
    assert_eq!(msg.stream_id, "test-stream");
    assert!(!msg.partial);
    assert_eq!(msg.words.len(), 2);
    assert_eq!(msg.words[0].text, "hello");
    assert_eq!(msg.words[1].end_time, 1.1);
    assert!(msg.error.is_none());
    assert!(!msg.ended);
}

#[test]
fn test_word_event_interim() {
    let json = r#"{
        "stream_id": "test-stream",
        "partial": true,
        "text": "hello wor"
    }"#;

    let msg: WordEventMessage = serde_json::from_str(json).unwrap();
    assert!(msg.partial);
    assert_eq!(msg.text, "hello wor");
    assert!(msg.words.is_empty());
}

#[test]
fn test_word_event_error_and_ended() {
    let json = r#"{ "stream_id": "test-stream", "error": "recognizer overloaded" }"#;
    let msg: WordEventMessage = serde_json::from_str(json).unwrap();
    assert_eq!(msg.error.as_deref(), Some("recognizer overloaded"));

    let json = r#"{ "stream_id": "test-stream", "ended": true }"#;
    let msg: WordEventMessage = serde_json::from_str(json).unwrap();
    assert!(msg.ended);
}
