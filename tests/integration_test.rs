/// End-to-end integration tests for Mock Inbox
///
/// These tests verify complete workflows: generate → group → export → reload
mod common;

use chrono::{Duration, Utc};
use common::{MessageBuilder, fixed_now, snapshot_of};
use mock_inbox::config::{ExportLayout, GenerationConfig, PlatformCounts};
use mock_inbox::export::{DigestSection, ExportOutcome, ExportSink, format_digest};
use mock_inbox::models::{DisplayPlatform, SourcePlatform};
use mock_inbox::{generate, group_by_display, load_export_document, to_structured_document};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

fn only(platform: SourcePlatform, count: u32) -> GenerationConfig {
    let mut counts = PlatformCounts::zero();
    counts.set(platform, count);
    GenerationConfig { counts, ..GenerationConfig::default() }
}

#[test]
fn test_e2e_two_whatsapp_messages() {
    let mut rng = StdRng::seed_from_u64(3);
    let snapshot = generate(&only(SourcePlatform::WhatsApp, 2), &mut rng, fixed_now());

    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.iter().all(|m| m.display == DisplayPlatform::Slack));

    let groups = group_by_display(&snapshot);
    assert_eq!(groups.bucket(DisplayPlatform::Slack).len(), 2);
    assert!(groups.bucket(DisplayPlatform::Email).is_empty());
    assert!(groups.bucket(DisplayPlatform::Teams).is_empty());

    let document = to_structured_document(&snapshot, &ExportLayout::default());
    assert!(document.emails.is_empty());
    assert!(document.msteams.channels.is_empty());
    assert_eq!(document.slack.channels.len(), 1);
    assert_eq!(document.slack.channels[0].name, "#whatsapp");
    assert_eq!(document.slack.channels[0].messages.len(), 2);
}

#[test]
fn test_e2e_default_generation_totals() {
    let mut rng = StdRng::seed_from_u64(11);
    let now = fixed_now();
    let snapshot = generate(&GenerationConfig::default(), &mut rng, now);

    assert_eq!(snapshot.len(), 170);
    let groups = group_by_display(&snapshot);
    assert_eq!(groups.bucket(DisplayPlatform::Email).len(), 30);
    assert_eq!(groups.bucket(DisplayPlatform::Slack).len(), 110);
    assert_eq!(groups.bucket(DisplayPlatform::Teams).len(), 30);

    // Newest first, all within the last week
    for pair in snapshot.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp);
    }
    assert!(snapshot.iter().all(|m| m.timestamp <= now && m.timestamp > now - Duration::days(7)));

    let document = to_structured_document(&snapshot, &ExportLayout::default());
    assert_eq!(document.message_count(), 170);
    let names: Vec<_> = document.slack.channels.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["#whatsapp", "#instagram", "#tiktok", "#snapchat"]);
}

#[test]
fn test_e2e_export_download_and_reload() {
    let downloads = TempDir::new().unwrap();
    let snapshot = snapshot_of(vec![
        MessageBuilder::new(1, SourcePlatform::Email)
            .sender("Carol White")
            .content("Thanks for the update on the project.")
            .minutes_ago(3),
        MessageBuilder::new(2, SourcePlatform::Snapchat).minutes_ago(10),
        MessageBuilder::new(3, SourcePlatform::Teams).read().minutes_ago(20),
    ]);
    let layout = ExportLayout::default();
    let document = to_structured_document(&snapshot, &layout);

    let mut sink = ExportSink::for_paths(None, false, Some(downloads.path().to_path_buf())).unwrap();
    let outcome = sink.write(&document, "example.json").unwrap();
    let ExportOutcome::Downloaded { path, save_error } = outcome else {
        panic!("expected a download, got {:?}", outcome);
    };
    assert!(save_error.is_none());

    let reloaded = load_export_document(&path).unwrap();
    assert_eq!(reloaded, document);
    assert_eq!(reloaded.emails[0].from, "Carol White <carol.white@example.com>");
    assert_eq!(reloaded.msteams.channel("General").unwrap().messages.len(), 1);

    let digest = format_digest(&reloaded, DigestSection::All);
    assert!(digest.contains("Subject: Thanks for the update on the project."));
    assert!(digest.contains("Channel: #snapchat"));
}

#[test]
fn test_e2e_export_does_not_mutate_snapshot() {
    let snapshot = snapshot_of(vec![
        MessageBuilder::new(1, SourcePlatform::Instagram),
        MessageBuilder::new(2, SourcePlatform::Email),
    ]);
    let before = snapshot.clone();

    let _ = to_structured_document(&snapshot, &ExportLayout::default());
    let _ = group_by_display(&snapshot);

    assert_eq!(snapshot, before);
}

#[test]
fn test_e2e_custom_layout_channel_names() {
    let snapshot = snapshot_of(vec![
        MessageBuilder::new(1, SourcePlatform::TikTok),
        MessageBuilder::new(2, SourcePlatform::Teams).sender("David Brown"),
        MessageBuilder::new(3, SourcePlatform::Email).sender("Grace Wilson"),
    ]);
    let mut layout = ExportLayout::default();
    layout.teams_channel = "Standup".to_string();
    layout.email_domain = "corp.test".to_string();

    let document = to_structured_document(&snapshot, &layout);
    assert_eq!(document.slack.channels[0].name, "#tiktok");

    let standup = document.msteams.channel("Standup").unwrap();
    assert_eq!(standup.messages.len(), 1);
    assert_eq!(standup.messages[0].from, "David Brown");
    assert!(document.msteams.channel("General").is_none());

    assert_eq!(document.emails.len(), 1);
    assert_eq!(document.emails[0].from, "Grace Wilson <grace.wilson@corp.test>");
    assert!(document.emails[0].from.ends_with("@corp.test>"));
}

#[test]
fn test_e2e_seeded_generation_is_deterministic() {
    let now = Utc::now();
    let config = GenerationConfig::default();
    let a = generate(&config, &mut StdRng::seed_from_u64(5), now);
    let b = generate(&config, &mut StdRng::seed_from_u64(5), now);
    assert_eq!(a, b);
}
