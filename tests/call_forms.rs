use receiver_binding::{Ambient, Behavior, CallContext, LogLine, Record, Strictness};
use serde_json::{json, Value};

fn en() -> [Value; 1] {
    [json!("en")]
}

#[test]
fn talk_en_through_record_reports_that_record() {
    let talk = Behavior::talk();
    let me = Record::new("Kyrylo");
    let line = talk.call_through(&me, &en());
    assert_eq!(line, LogLine::Context(CallContext::Receiver(me)));
    assert_eq!(line.render().unwrap(), r#"{"name":"Kyrylo"}"#);
}

#[test]
fn talk_other_tag_is_the_literal_and_carries_no_context() {
    let talk = Behavior::talk();
    let me = Record::new("Kyrylo");
    for tag in ["fr", ""] {
        let line = talk.call_through(&me, &[json!(tag)]);
        assert_eq!(line, LogLine::Literal("Tralala".to_string()));
        assert_eq!(line.render().unwrap(), "Tralala");
    }
}

#[test]
fn through_record_equals_explicit_per_argument_call() {
    let talk = Behavior::talk();
    let me = Record::new("Kyrylo");
    let through = talk.call_through(&me, &en());
    let explicit = talk.call_with(&CallContext::Receiver(me), "en");
    assert_eq!(through, explicit);
}

#[test]
fn per_argument_and_ordered_sequence_forms_agree() {
    let talk = Behavior::talk();
    let ctx = CallContext::Receiver(Record::new("Kyrylo 2"));
    assert_eq!(talk.call_with(&ctx, "en"), talk.apply_with(&ctx, &en()));
    assert_eq!(
        talk.call_with(&ctx, "fr"),
        talk.apply_with(&ctx, &[json!("fr")])
    );
}

#[test]
fn bare_invocation_never_resolves_a_record() {
    let talk = Behavior::talk();
    let ambient = Ambient::global();

    let sloppy = talk.call_bare(&ambient, Strictness::Sloppy, &en());
    assert_eq!(sloppy, LogLine::Context(CallContext::Global(ambient.clone())));
    assert_eq!(sloppy.render().unwrap(), r#"{"scope":"global"}"#);

    let strict = talk.call_bare(&ambient, Strictness::Strict, &en());
    assert_eq!(strict, LogLine::Context(CallContext::Undefined));
    assert_eq!(strict.render().unwrap(), "undefined");
}
