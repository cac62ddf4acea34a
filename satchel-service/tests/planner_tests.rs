mod support;

use chrono::{NaiveDate, Weekday};
use pretty_assertions::assert_eq;
use satchel_records::{MarkDraft, NoteDraft, StudyHourDraft};
use satchel_service::ServiceError;
use support::{env, registration};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn note_draft(title: &str, day: NaiveDate) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        description: format!("{title} details"),
        date: day,
    }
}

#[tokio::test]
async fn unauthenticated_session_cannot_touch_records() {
    let env = env();
    let user_id = Uuid::new_v4();

    let result = env
        .planner
        .add_note("never-logged-in", user_id, &note_draft("x", date(2025, 1, 1)))
        .await;

    assert!(matches!(result, Err(ServiceError::NotAuthenticated)));
}

#[tokio::test]
async fn note_crud_roundtrip() {
    let env = env();
    let user = env
        .accounts
        .register("s", registration("n@example.com", "N"))
        .await
        .unwrap();
    let uid = user.user_id;

    let id = env
        .planner
        .add_note("s", uid, &note_draft("Biology revision", date(2025, 3, 12)))
        .await
        .unwrap();

    // read back
    let note = env.planner.note("s", uid, id).await.unwrap();
    assert_eq!(note.title, "Biology revision");
    assert_eq!(note.date, date(2025, 3, 12));

    // update re-encrypts under the same id
    env.planner
        .update_note("s", uid, id, &note_draft("Biology exam", date(2025, 3, 13)))
        .await
        .unwrap();
    let updated = env.planner.note("s", uid, id).await.unwrap();
    assert_eq!(updated.title, "Biology exam");
    assert_eq!(updated.date, date(2025, 3, 13));

    // delete
    env.planner.delete_note("s", uid, id).await.unwrap();
    assert!(matches!(
        env.planner.note("s", uid, id).await,
        Err(ServiceError::NotFound("note"))
    ));
}

#[tokio::test]
async fn notes_on_day_and_calendar_days() {
    let env = env();
    let user = env
        .accounts
        .register("s", registration("cal@example.com", "Cal"))
        .await
        .unwrap();
    let uid = user.user_id;

    for (title, day) in [
        ("first", date(2025, 5, 3)),
        ("second", date(2025, 5, 3)),
        ("other day", date(2025, 5, 17)),
    ] {
        env.planner
            .add_note("s", uid, &note_draft(title, day))
            .await
            .unwrap();
    }

    let on_third = env.planner.notes_on("s", uid, date(2025, 5, 3)).await.unwrap();
    assert_eq!(on_third.len(), 2);

    let days = env
        .planner
        .note_days("s", uid, date(2025, 5, 1), date(2025, 5, 31))
        .await
        .unwrap();
    assert_eq!(days, vec![3, 17]);
}

#[tokio::test]
async fn oversized_title_rejected_on_create_and_update() {
    let env = env();
    let user = env
        .accounts
        .register("s", registration("len@example.com", "Len"))
        .await
        .unwrap();
    let uid = user.user_id;

    let oversized = note_draft(&"t".repeat(250), date(2025, 2, 2));
    let created = env.planner.add_note("s", uid, &oversized).await;
    assert!(matches!(
        created,
        Err(ServiceError::FieldTooLong { field: "title" })
    ));

    // The same limit applies on the update path
    let id = env
        .planner
        .add_note("s", uid, &note_draft("short", date(2025, 2, 2)))
        .await
        .unwrap();
    let updated = env.planner.update_note("s", uid, id, &oversized).await;
    assert!(matches!(
        updated,
        Err(ServiceError::FieldTooLong { field: "title" })
    ));

    // And the stored row still decrypts to the pre-update value
    assert_eq!(env.planner.note("s", uid, id).await.unwrap().title, "short");
}

#[tokio::test]
async fn marks_come_back_newest_first() {
    let env = env();
    let user = env
        .accounts
        .register("s", registration("m@example.com", "M"))
        .await
        .unwrap();
    let uid = user.user_id;

    for (grade, title, day) in [
        (6.0, "older", date(2025, 1, 10)),
        (9.0, "newest", date(2025, 6, 1)),
        (7.5, "middle", date(2025, 3, 15)),
    ] {
        env.planner
            .add_mark(
                "s",
                uid,
                &MarkDraft {
                    grade,
                    title: title.to_string(),
                    subject: "Maths".to_string(),
                    date: day,
                },
            )
            .await
            .unwrap();
    }

    let marks = env.planner.marks("s", uid).await.unwrap();
    let titles: Vec<&str> = marks.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["newest", "middle", "older"]);
    assert_eq!(marks[0].grade, 9.0);
    assert_eq!(marks[0].subject, "Maths");
}

#[tokio::test]
async fn mark_update_and_delete() {
    let env = env();
    let user = env
        .accounts
        .register("s", registration("mu@example.com", "Mu"))
        .await
        .unwrap();
    let uid = user.user_id;

    let id = env
        .planner
        .add_mark(
            "s",
            uid,
            &MarkDraft {
                grade: 5.0,
                title: "retake".to_string(),
                subject: "History".to_string(),
                date: date(2025, 4, 4),
            },
        )
        .await
        .unwrap();

    env.planner
        .update_mark(
            "s",
            uid,
            id,
            &MarkDraft {
                grade: 7.0,
                title: "retake passed".to_string(),
                subject: "History".to_string(),
                date: date(2025, 4, 18),
            },
        )
        .await
        .unwrap();

    let marks = env.planner.marks("s", uid).await.unwrap();
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0].grade, 7.0);
    assert_eq!(marks[0].title, "retake passed");

    env.planner.delete_mark("s", uid, id).await.unwrap();
    assert!(env.planner.marks("s", uid).await.unwrap().is_empty());
}

#[tokio::test]
async fn hours_grouped_by_weekday() {
    let env = env();
    let user = env
        .accounts
        .register("s", registration("h@example.com", "H"))
        .await
        .unwrap();
    let uid = user.user_id;

    for (day, hours, name) in [
        (Weekday::Mon, 2.0, "Algebra"),
        (Weekday::Mon, 1.0, "Reading"),
        (Weekday::Fri, 0.5, "Flashcards"),
    ] {
        env.planner
            .add_hour(
                "s",
                uid,
                &StudyHourDraft {
                    day,
                    hours,
                    name: name.to_string(),
                },
            )
            .await
            .unwrap();
    }

    let monday = env.planner.hours_for_day("s", uid, Weekday::Mon).await.unwrap();
    assert_eq!(monday.len(), 2);
    assert!(monday.iter().all(|h| h.day == Weekday::Mon));
    let names: Vec<&str> = monday.iter().map(|h| h.name.as_str()).collect();
    assert!(names.contains(&"Algebra") && names.contains(&"Reading"));

    let friday = env.planner.hours_for_day("s", uid, Weekday::Fri).await.unwrap();
    assert_eq!(friday.len(), 1);
    assert_eq!(friday[0].hours, 0.5);
}

#[tokio::test]
async fn records_are_scoped_to_their_owner() {
    let env = env();
    let u1 = env
        .accounts
        .register("s1", registration("own1@example.com", "One"))
        .await
        .unwrap();
    let u2 = env
        .accounts
        .register("s2", registration("own2@example.com", "Two"))
        .await
        .unwrap();

    let note_id = env
        .planner
        .add_note("s1", u1.user_id, &note_draft("mine", date(2025, 8, 8)))
        .await
        .unwrap();

    // Addressing another user's record behaves like a missing record
    assert!(matches!(
        env.planner.note("s2", u2.user_id, note_id).await,
        Err(ServiceError::NotFound("note"))
    ));
    assert!(matches!(
        env.planner
            .update_note("s2", u2.user_id, note_id, &note_draft("stolen", date(2025, 8, 9)))
            .await,
        Err(ServiceError::NotFound("note"))
    ));
    assert!(matches!(
        env.planner.delete_note("s2", u2.user_id, note_id).await,
        Err(ServiceError::NotFound("note"))
    ));

    // Owner still sees the original
    assert_eq!(
        env.planner.note("s1", u1.user_id, note_id).await.unwrap().title,
        "mine"
    );
}
