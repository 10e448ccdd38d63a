//! Integration tests for the resume chat

use resume_chat::chat::{Conversation, Sender};
use resume_chat::intent::formatter::{format_projects, FALLBACK_RESPONSE, GREETING};
use resume_chat::{match_intent, Intent, IntentMatcher, IntentTag, ResumeDocument};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

fn fixture() -> ResumeDocument {
    ResumeDocument::from_path(Path::new("tests/fixtures/resume.json")).unwrap()
}

#[test]
fn test_skills_listing() {
    let resume = fixture();
    let result = match_intent("what are your skills?", &resume);

    assert_eq!(result.intent, IntentTag::Single(Intent::Skills));
    assert!(result
        .response
        .lines()
        .any(|line| line == format!("Languages: {}", resume.skills.languages.join(", "))));
}

#[test]
fn test_confidence_phrase_never_lists_skills() {
    let resume = fixture();
    for input in [
        "what's your proficiency with these skills",
        "skill level?",
        "Rate your skills",
        "how good are your skills with technology",
        "how confident are you in your skills",
    ] {
        let result = match_intent(input, &resume);
        assert!(!result.intent.contains(Intent::Skills), "input {:?}", input);
    }
}

#[test]
fn test_confidence_all_lines() {
    let resume = fixture();
    let result = match_intent("confidence all", &resume);

    assert_eq!(result.intent, IntentTag::Single(Intent::Confidence));
    let lines: Vec<&str> = result.response.lines().collect();
    assert_eq!(lines.len(), resume.confidence.len());
    assert_eq!(lines[0], "Python: 5/5 (Expert)");
    assert_eq!(lines[1], "C: 2/5 (Novice)");
    assert_eq!(lines[2], "C++: 4/5 (Advanced)");
    assert_eq!(lines[3], "Kubernetes: 3/5 (Intermediate)");
}

#[test]
fn test_cpp_preferred_over_c() {
    let resume = fixture();
    let result = match_intent("how confident are you in C++?", &resume);
    assert_eq!(result.response, "C++: 4/5 (Advanced)");
}

#[test]
fn test_c_not_found_inside_docker() {
    let resume = fixture();

    let plain = match_intent("do you use docker?", &resume);
    assert_ne!(plain.response, "C: 2/5 (Novice)");

    let rated = match_intent("how good are you with docker?", &resume);
    assert!(rated.intent.is_composite());
    assert!(rated.response.starts_with("I can provide confidence ratings"));
}

#[test]
fn test_about_is_verbatim() {
    let resume = fixture();
    let result = match_intent("tell me about yourself", &resume);

    assert_eq!(result.intent, IntentTag::Single(Intent::About));
    assert_eq!(result.response, resume.about.short);
}

#[test]
fn test_projects_reply() {
    let resume = fixture();
    let result = match_intent("show me a project", &resume);

    assert_eq!(result.intent, IntentTag::Single(Intent::Projects));
    assert_eq!(result.response, format_projects(&resume.projects));
    assert!(result.response.contains("*Link:* https://github.com/example/tracer"));
}

#[test]
fn test_unknown_fallback() {
    let resume = fixture();
    let result = match_intent("asdkfj", &resume);

    assert_eq!(result.intent, IntentTag::Single(Intent::Unknown));
    assert_eq!(result.response, FALLBACK_RESPONSE);
}

#[test]
fn test_matching_is_pure() {
    let resume = fixture();
    let before = resume.clone();

    let first = match_intent("proficiency in kubernetes", &resume);
    let second = match_intent("proficiency in kubernetes", &resume);

    assert_eq!(first, second);
    assert_eq!(first.response, "Kubernetes: 3/5 (Intermediate)");
    assert_eq!(resume, before);
}

#[test]
fn test_partial_document_is_tolerated() {
    let resume = ResumeDocument::from_path(Path::new("tests/fixtures/partial_resume.json")).unwrap();

    assert_eq!(
        match_intent("skills", &resume).response,
        "Here are my technical skills: \nLanguages: \nTools: \nDomains: "
    );
    assert_eq!(
        match_intent("projects", &resume).response,
        "Here are some of my projects: \n\n"
    );
    assert!(match_intent("rate python", &resume).intent.is_composite());
}

#[test]
fn test_null_arrays_are_tolerated() {
    let resume = ResumeDocument::from_path(Path::new("tests/fixtures/null_resume.json")).unwrap();

    assert_eq!(
        match_intent("what tools do you know", &resume).response,
        "Here are my technical skills: \nLanguages: \nTools: Docker\nDomains: "
    );
    assert!(match_intent("show me a project", &resume)
        .response
        .contains("*Tech:* \n*Link:* \n----"));
    assert_eq!(
        match_intent("confidence all", &resume).response,
        "No confidence data available."
    );
    assert!(match_intent("rate docker", &resume).intent.is_composite());
}

#[test]
fn test_shared_matcher_across_threads() {
    let matcher = Arc::new(IntentMatcher::new(fixture()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let matcher = Arc::clone(&matcher);
            std::thread::spawn(move || matcher.respond("rate your c++").response)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "C++: 4/5 (Advanced)");
    }
}

#[tokio::test]
async fn test_conversation_flow() {
    let matcher = Arc::new(IntentMatcher::new(fixture()));
    let mut chat = Conversation::new(matcher, GREETING, Duration::ZERO);

    assert!(chat.send("   ").await.is_none());
    let reply = chat.send("who are you").await.unwrap().content.clone();

    assert_eq!(reply, "Backend engineer, occasional tinkerer, reluctant designer.");
    let senders: Vec<Sender> = chat.messages().iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::Bot]);
}

#[test]
fn test_missing_resume_file() {
    let result = ResumeDocument::from_path(Path::new("tests/fixtures/nonexistent.json"));
    assert!(result.is_err());
}
