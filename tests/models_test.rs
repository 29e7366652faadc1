use prospector::api::models::*;
use serde_json::json;

#[test]
fn test_lead_list_coercion() {
    let payload = json!([
        {
            "id": 42,
            "name": "Ada Lovelace",
            "company": "Analytical Engines",
            "title": "Founder",
            "email": "ada@example.com",
            "insight": "Ships early"
        },
        {
            "name": "No Id Provided",
            "email": "anon@example.com"
        }
    ]);

    let leads = coerce_leads(payload);
    assert_eq!(leads.len(), 2);

    // Numeric ids are stringified so selection keys stay uniform
    assert_eq!(leads[0].id, "42");
    assert_eq!(leads[0].name, "Ada Lovelace");
    assert_eq!(leads[0].company, "Analytical Engines");
    assert!(leads[0].phone.is_none());

    // A missing id gets generated so the row is still selectable
    assert!(!leads[1].id.is_empty());
    assert_eq!(leads[1].email, "anon@example.com");
}

#[test]
fn test_bare_object_becomes_single_lead() {
    let payload = json!({
        "id": "solo",
        "name": "Only One",
        "email": "solo@example.com"
    });

    let leads = coerce_leads(payload);
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].id, "solo");
    assert_eq!(leads[0].name, "Only One");
}

#[test]
fn test_non_lead_payloads_coerce_to_empty() {
    assert!(coerce_leads(json!("unexpected string")).is_empty());
    assert!(coerce_leads(json!(7)).is_empty());
    assert!(coerce_leads(json!(null)).is_empty());
}

#[test]
fn test_preview_coercion() {
    let payload = json!({
        "1": "Hi Ada, saw your launch",
        "2": { "subject": "Hello", "message": "Hi Grace, quick question" },
        "3": { "subject": "No message field here" },
        "4": 99
    });

    let previews = coerce_previews(payload);
    assert_eq!(previews.len(), 2);
    assert_eq!(previews.get("1").map(String::as_str), Some("Hi Ada, saw your launch"));
    assert_eq!(previews.get("2").map(String::as_str), Some("Hi Grace, quick question"));
    assert!(!previews.contains_key("3"));
    assert!(!previews.contains_key("4"));
}

#[test]
fn test_schedule_settings_accept_loose_types() {
    // The backend sends camelCase keys and is sloppy about number vs string
    let settings: ScheduleSettings = serde_json::from_value(json!({
        "sendTime": 9,
        "timezone": "Europe/Paris",
        "autoFollowup": true,
        "followupDelay": "5",
        "followupCount": 2
    }))
    .unwrap();

    assert_eq!(settings.send_time, "9");
    assert_eq!(settings.timezone, "Europe/Paris");
    assert!(settings.auto_followup);
    assert_eq!(settings.followup_delay, 5);
    assert_eq!(settings.followup_count, 2);
}

#[test]
fn test_schedule_settings_defaults() {
    let settings: ScheduleSettings = serde_json::from_value(json!({})).unwrap();
    assert_eq!(settings.send_time, "9");
    assert_eq!(settings.timezone, "America/New_York");
    assert!(!settings.auto_followup);
    assert_eq!(settings.followup_delay, 3);
    assert_eq!(settings.followup_count, 1);
}

#[test]
fn test_email_status_without_settings() {
    let status: EmailStatus = serde_json::from_value(json!({
        "connected": true,
        "email": "me@gmail.com",
        "provider": "gmail"
    }))
    .unwrap();

    assert!(status.connected);
    assert_eq!(status.settings.send_time, "9");

    let connection = EmailConnection::from_status(&status);
    assert!(connection.is_connected());
    assert!(matches!(
        connection,
        EmailConnection::Connected { ref email, .. } if email == "me@gmail.com"
    ));
}

#[test]
fn test_disconnected_status_maps_to_unconfigured() {
    let status: EmailStatus = serde_json::from_value(json!({ "connected": false })).unwrap();
    let connection = EmailConnection::from_status(&status);
    assert!(!connection.is_connected());
    assert!(!connection.is_connecting());
    assert!(matches!(connection, EmailConnection::Unconfigured));
}

#[test]
fn test_audience_searchability() {
    let mut audience = TargetAudience {
        title: "VP Engineering".to_string(),
        description: "Mid-size SaaS teams".to_string(),
        ..Default::default()
    };
    assert!(audience.is_searchable());

    audience.description = "   ".to_string();
    assert!(!audience.is_searchable());

    audience.title.clear();
    assert!(!audience.is_searchable());
}

#[test]
fn test_provider_slugs_round_trip() {
    for provider in EmailProvider::ALL {
        assert_eq!(EmailProvider::from_slug(provider.slug()), Some(provider));
    }
    assert_eq!(EmailProvider::from_slug("carrier-pigeon"), None);

    assert!(EmailProvider::Gmail.uses_oauth());
    assert!(EmailProvider::Outlook.uses_oauth());
    assert!(!EmailProvider::Smtp.uses_oauth());
}

#[test]
fn test_smtp_credentials_redact_password_in_debug() {
    let creds = SmtpCredentials {
        email: "me@corp.com".to_string(),
        password: "hunter2".to_string(),
        server: "smtp.corp.com".to_string(),
        port: 587,
        use_ssl: true,
    };

    let rendered = format!("{creds:?}");
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("hunter2"));
}
