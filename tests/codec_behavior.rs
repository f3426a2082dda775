//! Behavioral suite for the wire codec: wrapping laws, envelope
//! construction, and response decoding through the public API.

use serde_json::{json, Value};

use notebooklm_core::decoder::{decode_response, RpcOutcome, RESPONSE_PREFIX};
use notebooklm_core::encoder::{
    build_request_body, build_url, encode_rpc_request, UrlContext, BATCHEXECUTE_URL,
};
use notebooklm_core::params::{
    unwrap_double, unwrap_quadruple, unwrap_single, unwrap_triple, wrap_double, wrap_each_double,
    wrap_each_single, wrap_quadruple, wrap_single, wrap_triple,
};
use notebooklm_core::schema::{build, Fields, Operation};
use notebooklm_core::RpcMethod;

#[test]
fn wrapping_inverts_at_every_depth() {
    assert_eq!(unwrap_single(&wrap_single("x")).cloned(), Some(json!("x")));
    assert_eq!(unwrap_double(&wrap_double("x")).cloned(), Some(json!("x")));
    assert_eq!(unwrap_triple(&wrap_triple("x")).cloned(), Some(json!("x")));
    assert_eq!(
        unwrap_quadruple(&wrap_quadruple("x")).cloned(),
        Some(json!("x"))
    );
}

#[test]
fn unwrapping_refuses_the_wrong_depth() {
    assert_eq!(unwrap_double(&wrap_single("x")), None);
    assert_eq!(unwrap_triple(&wrap_double("x")), None);
    // A two-element array is not a wrapper.
    assert_eq!(unwrap_single(&json!(["a", "b"])), None);
}

#[test]
fn per_id_wrappers_match_the_generation_frames() {
    let ids = vec![String::from("s1"), String::from("s2")];
    assert_eq!(wrap_each_single(&ids), json!([["s1"], ["s2"]]));
    assert_eq!(wrap_each_double(&ids), json!([[["s1"]], [["s2"]]]));
    assert_eq!(wrap_each_single(&[]), json!([]));
}

#[test]
fn envelope_is_doubly_encoded_and_survives_a_round_trip() {
    let call = build(
        Operation::CreateNotebook,
        &Fields::new().set("title", "Ocean currents & \"tides\""),
    )
    .unwrap();

    let envelope = encode_rpc_request(call.method, &call.params);
    assert_eq!(envelope[0][0][0], json!("CCqFvf"));
    assert_eq!(envelope[0][0][3], json!("generic"));

    // The params travel as a JSON string inside the JSON envelope.
    let inner = envelope[0][0][1].as_str().unwrap();
    let decoded: Value = serde_json::from_str(inner).unwrap();
    assert_eq!(decoded, call.params);
}

#[test]
fn form_body_keeps_its_trailing_separator() {
    let envelope = json!([[["wXbhsf", "[]", null, "generic"]]]);
    let with_csrf = build_request_body(&envelope, Some("AB:cd/ef+g"));
    assert!(with_csrf.starts_with("f.req="));
    assert!(with_csrf.contains("&at="));
    assert!(with_csrf.ends_with('&'));
    // Reserved characters in the token are escaped.
    assert!(!with_csrf.contains("AB:cd/ef+g"));

    let without_csrf = build_request_body(&envelope, None);
    assert!(!without_csrf.contains("at="));
    assert!(without_csrf.ends_with('&'));
}

#[test]
fn url_carries_routing_params_with_rt_last() {
    let url = build_url(
        RpcMethod::GetNotebook,
        &UrlContext {
            source_path: "/notebook/nb_1",
            session_id: Some("-42"),
            build_label: Some("boq_labs-tailwind_20250101"),
            request_id: Some(300_000),
        },
    );
    assert!(url.starts_with(BATCHEXECUTE_URL));
    assert!(url.contains("rpcids=rLM1Ne"));
    assert!(url.contains("source-path=%2Fnotebook%2Fnb_1"));
    assert!(url.contains("hl=en"));
    assert!(url.contains("f.sid=-42"));
    assert!(url.contains("_reqid=300000"));
    assert!(url.ends_with("rt=c"));
}

#[test]
fn decoder_selects_the_matching_chunk_among_many() {
    let own = json!(["wrb.fr", "rLM1Ne", "[\"payload\"]", null, null]);
    let other = json!(["wrb.fr", "wXbhsf", "[\"noise\"]", null, null]);
    let chunks = serde_json::to_string(&json!([other, own])).unwrap();
    let body = format!("{RESPONSE_PREFIX}\n{}\n{}\n", chunks.len(), chunks);

    let outcome = decode_response(&body, RpcMethod::GetNotebook).unwrap();
    assert_eq!(outcome, RpcOutcome::Success(json!(["payload"])));
}

#[test]
fn decoder_reports_missing_for_an_unanswered_method() {
    let chunk = serde_json::to_string(&json!([[
        "wrb.fr", "wXbhsf", "[]", null, null
    ]]))
    .unwrap();
    let body = format!("{RESPONSE_PREFIX}\n{}\n{}\n", chunk.len(), chunk);

    let outcome = decode_response(&body, RpcMethod::DeleteNotebook).unwrap();
    assert_eq!(outcome, RpcOutcome::Missing);
}

#[test]
fn advisory_length_lines_do_not_gate_parsing() {
    // Lengths disagree with reality; the decoder accumulates until the
    // buffer parses as JSON.
    let body = ")]}'\n999\n[[\"wrb.fr\",\"wXbhsf\",\n\"[1]\",null,null]]\n";
    let outcome = decode_response(body, RpcMethod::ListNotebooks).unwrap();
    assert_eq!(outcome, RpcOutcome::Success(json!([1])));
}

#[test]
fn quiz_and_flashcard_frames_are_pinned() {
    let ids = vec![String::from("s1")];
    let fields = Fields::new()
        .set("notebook_id", "nb")
        .set("source_ids_triple", wrap_each_double(&ids))
        .set("instructions", Value::Null)
        .set("quantity", 2)
        .set("difficulty", 1);

    let quiz = build(Operation::GenerateQuiz, &fields).unwrap().params;
    let cards = build(Operation::GenerateFlashcards, &fields).unwrap().params;

    assert_eq!(
        quiz[2],
        json!([
            null, null, 4, [[["s1"]]],
            null, null, null, null, null,
            [null, [2, null, null, null, null, null, null, [2, 1]]]
        ])
    );
    assert_eq!(
        cards[2],
        json!([
            null, null, 4, [[["s1"]]],
            null, null, null, null, null,
            [null, [1, null, null, null, null, null, [1, 2]]]
        ])
    );
}
