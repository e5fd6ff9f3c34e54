use dayplan_core::service::practice_service::{
    add_practice_activity, delete_practice_activity, practice_summary, PracticeDraft,
};
use dayplan_core::service::study_service::{
    add_study_topic, delete_study_topic, study_summary, StudyTopicDraft,
};
use dayplan_core::service::task_service::{
    add_task, delete_task, task_stats, toggle_task, update_task, TaskDraft,
};
use dayplan_core::{DateKey, DayRecord, Difficulty, Minutes};
use uuid::Uuid;

fn date() -> DateKey {
    "2026-08-05".parse().unwrap()
}

fn task_draft(start_time: &str, name: &str) -> TaskDraft {
    TaskDraft {
        start_time: start_time.to_string(),
        end_time: "23:00".to_string(),
        name: name.to_string(),
        category: "Study".to_string(),
    }
}

#[test]
fn tasks_stay_sorted_by_start_time_after_every_add() {
    let mut record = DayRecord::default();

    add_task(&mut record, &task_draft("14:00", "afternoon"));
    assert_sorted(&record);

    add_task(&mut record, &task_draft("08:30", "morning"));
    assert_sorted(&record);

    add_task(&mut record, &task_draft("10:15", "midday"));
    assert_sorted(&record);

    let names: Vec<&str> = record.tasks.iter().map(|task| task.name.as_str()).collect();
    assert_eq!(names, ["morning", "midday", "afternoon"]);
}

#[test]
fn equal_start_times_keep_insertion_order() {
    let mut record = DayRecord::default();

    add_task(&mut record, &task_draft("09:00", "first"));
    add_task(&mut record, &task_draft("09:00", "second"));
    add_task(&mut record, &task_draft("09:00", "third"));

    let names: Vec<&str> = record.tasks.iter().map(|task| task.name.as_str()).collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn added_tasks_start_incomplete_with_fresh_ids() {
    let mut record = DayRecord::default();

    let first = add_task(&mut record, &task_draft("09:00", "one"));
    let second = add_task(&mut record, &task_draft("10:00", "two"));

    assert!(!first.completed);
    assert!(!second.completed);
    assert_ne!(first.id, second.id);
}

#[test]
fn toggle_is_its_own_inverse() {
    let mut record = DayRecord::default();
    let task = add_task(&mut record, &task_draft("09:00", "flip me"));

    assert!(toggle_task(&mut record, task.id));
    assert!(record.tasks[0].completed);

    assert!(toggle_task(&mut record, task.id));
    assert!(!record.tasks[0].completed);
}

#[test]
fn update_overwrites_fields_but_not_completed_and_resorts() {
    let mut record = DayRecord::default();
    add_task(&mut record, &task_draft("08:00", "early"));
    let task = add_task(&mut record, &task_draft("09:00", "movable"));
    toggle_task(&mut record, task.id);

    let updated = update_task(&mut record, task.id, &task_draft("07:00", "moved"));
    assert!(updated);

    assert_eq!(record.tasks[0].name, "moved");
    assert_eq!(record.tasks[0].start_time, "07:00");
    assert!(record.tasks[0].completed, "completed must survive an update");
    assert_sorted(&record);
}

#[test]
fn unknown_ids_are_silent_no_ops() {
    let mut record = DayRecord::default();
    let task = add_task(&mut record, &task_draft("09:00", "only"));
    let stranger = Uuid::new_v4();

    assert!(!update_task(&mut record, stranger, &task_draft("10:00", "x")));
    assert!(!toggle_task(&mut record, stranger));
    assert!(!delete_task(&mut record, stranger));
    assert!(!delete_study_topic(&mut record, stranger));
    assert!(!delete_practice_activity(&mut record, stranger));

    assert_eq!(record.tasks.len(), 1);
    assert_eq!(record.tasks[0], task);
}

#[test]
fn stats_round_half_up_and_default_to_zero() {
    let mut record = DayRecord::default();
    assert_eq!(task_stats(&record).rate, 0);

    let a = add_task(&mut record, &task_draft("08:00", "a"));
    add_task(&mut record, &task_draft("09:00", "b"));
    let c = add_task(&mut record, &task_draft("10:00", "c"));

    toggle_task(&mut record, a.id);
    let one_of_three = task_stats(&record);
    assert_eq!(one_of_three.total, 3);
    assert_eq!(one_of_three.completed, 1);
    assert_eq!(one_of_three.rate, 33);

    toggle_task(&mut record, c.id);
    assert_eq!(task_stats(&record).rate, 67);
}

#[test]
fn blank_study_topics_are_declined() {
    let mut record = DayRecord::default();

    assert!(add_study_topic(&mut record, &StudyTopicDraft::default(), date()).is_none());

    let whitespace = StudyTopicDraft {
        topic: "   ".to_string(),
        ..StudyTopicDraft::default()
    };
    assert!(add_study_topic(&mut record, &whitespace, date()).is_none());

    assert!(record.study_topics.is_empty());
}

#[test]
fn study_topic_defaults_apply() {
    let mut record = DayRecord::default();
    let draft = StudyTopicDraft {
        topic: "  Linear Algebra  ".to_string(),
        ..StudyTopicDraft::default()
    };

    let topic = add_study_topic(&mut record, &draft, date()).unwrap();

    assert_eq!(topic.topic, "Linear Algebra");
    assert_eq!(topic.duration, None);
    assert_eq!(topic.difficulty, Difficulty::Intermediate);
    assert_eq!(topic.resource, "Other");
    assert_eq!(topic.notes, None);
    assert_eq!(topic.date, date());
}

#[test]
fn study_summary_ignores_non_numeric_durations() {
    let mut record = DayRecord::default();
    for duration in ["30", "", "abc"] {
        let draft = StudyTopicDraft {
            topic: "math".to_string(),
            duration: duration.to_string(),
            ..StudyTopicDraft::default()
        };
        add_study_topic(&mut record, &draft, date()).unwrap();
    }

    let summary = study_summary(&record);
    assert_eq!(summary.total_sessions, 3);
    assert_eq!(summary.total_minutes, 30);

    // The non-numeric entry is stored exactly as entered.
    assert_eq!(
        record.study_topics[2].duration,
        Some(Minutes::Raw("abc".to_string()))
    );
}

#[test]
fn practice_completed_requires_the_literal_true() {
    let mut record = DayRecord::default();

    for (input, expected) in [("true", true), ("yes", false), ("TRUE", false), ("", false)] {
        let draft = PracticeDraft {
            kind: "Podcast".to_string(),
            completed: input.to_string(),
            ..PracticeDraft::default()
        };
        let entry = add_practice_activity(&mut record, &draft, date());
        assert_eq!(entry.completed, expected, "input `{input}`");
    }

    // No blank guard: all four submissions were stored.
    assert_eq!(record.practice_activities.len(), 4);
}

#[test]
fn practice_summary_counts_and_sums_leniently() {
    let mut record = DayRecord::default();
    for (duration, completed) in [("20", "true"), ("forty", "true"), ("15", "")] {
        let draft = PracticeDraft {
            kind: "Speaking".to_string(),
            duration: duration.to_string(),
            completed: completed.to_string(),
            content: "  shadowing  ".to_string(),
            ..PracticeDraft::default()
        };
        add_practice_activity(&mut record, &draft, date());
    }

    let summary = practice_summary(&record);
    assert_eq!(summary.total_activities, 3);
    assert_eq!(summary.completed_activities, 2);
    assert_eq!(summary.total_minutes, 35);

    assert_eq!(
        record.practice_activities[0].content.as_deref(),
        Some("shadowing")
    );
}

#[test]
fn day_record_serialization_uses_expected_wire_fields() {
    let mut record = DayRecord::default();
    add_task(&mut record, &task_draft("09:00", "review"));

    let study = StudyTopicDraft {
        topic: "graphs".to_string(),
        duration: "45".to_string(),
        ..StudyTopicDraft::default()
    };
    add_study_topic(&mut record, &study, date()).unwrap();

    let practice = PracticeDraft {
        kind: "Reading".to_string(),
        duration: "a while".to_string(),
        completed: "true".to_string(),
        ..PracticeDraft::default()
    };
    add_practice_activity(&mut record, &practice, date());

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["tasks"][0]["start_time"], "09:00");
    assert_eq!(json["tasks"][0]["completed"], false);
    assert_eq!(json["study_topics"][0]["difficulty"], "intermediate");
    assert_eq!(json["study_topics"][0]["duration"], 45);
    assert_eq!(json["study_topics"][0]["date"], "2026-08-05");
    assert_eq!(json["practice_activities"][0]["type"], "Reading");
    assert_eq!(json["practice_activities"][0]["duration"], "a while");

    let decoded: DayRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn partial_payloads_load_with_empty_collections() {
    let decoded: DayRecord = serde_json::from_str("{\"tasks\":[]}").unwrap();
    assert!(decoded.study_topics.is_empty());
    assert!(decoded.practice_activities.is_empty());
    assert!(decoded.is_empty());
}

fn assert_sorted(record: &DayRecord) {
    let times: Vec<&str> = record
        .tasks
        .iter()
        .map(|task| task.start_time.as_str())
        .collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted, "task list must stay sorted by start time");
}
