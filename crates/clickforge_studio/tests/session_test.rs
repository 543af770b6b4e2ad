// Session slot tests: supersede semantics and slot independence.

mod test_utils;

use clickforge_error::{ClickforgeError, GeminiError, GeminiErrorKind, JobError, JobErrorKind};
use clickforge_studio::{JobKind, JobSlot, Session, SlotState, Studio, StudioSettings};
use test_utils::{SCRIPT_JSON, happy_driver, sample_analysis};

#[test]
fn test_stale_result_is_discarded() {
    let mut slot: JobSlot<u32> = JobSlot::new(JobKind::Analysis);

    let first = slot.begin();
    let second = slot.begin();
    assert!(slot.is_loading());

    // The newer run settles first, then the older one arrives late.
    assert!(slot.settle(second, Ok(2)));
    assert!(!slot.settle(first, Ok(1)));

    assert_eq!(slot.result(), Some(&2));
    assert!(slot.error().is_none());
}

#[test]
fn test_stale_failure_does_not_overwrite_result() {
    let mut slot: JobSlot<u32> = JobSlot::new(JobKind::Script);

    let first = slot.begin();
    let second = slot.begin();
    assert!(slot.settle(second, Ok(7)));

    let late: ClickforgeError =
        JobError::new(JobErrorKind::ScriptFailed("HTTP 500".into())).into();
    assert!(!slot.settle(first, Err(late)));
    assert_eq!(slot.state(), &SlotState::Ready(7));
}

#[test]
fn test_failure_stores_display_message() {
    let mut slot: JobSlot<u32> = JobSlot::new(JobKind::Combos);

    let ticket = slot.begin();
    let err: ClickforgeError = JobError::new(JobErrorKind::ImageDataMissing {
        prompt: "a snail on cereal".into(),
    })
    .into();
    assert!(slot.settle(ticket, Err(err)));

    assert_eq!(
        slot.error(),
        Some("Image data not found in response for prompt: a snail on cereal")
    );
    assert!(slot.result().is_none());
    assert!(!slot.is_loading());
}

#[test]
fn test_begin_clears_previous_outcome() {
    let mut slot: JobSlot<u32> = JobSlot::new(JobKind::Analysis);

    let ticket = slot.begin();
    let err: ClickforgeError = GeminiError::new(GeminiErrorKind::MissingApiKey).into();
    slot.settle(ticket, Err(err));
    assert!(slot.error().is_some());

    slot.begin();
    assert!(slot.error().is_none());
    assert!(slot.result().is_none());
    assert!(slot.is_loading());
}

#[test]
fn test_ticket_from_another_job_is_rejected() {
    let mut session = Session::new();

    let analysis_ticket = session.analysis_mut().begin();
    let script_ticket = session.script_mut().begin();
    assert_eq!(analysis_ticket.generation(), script_ticket.generation());

    assert!(!session.script_mut().settle(
        analysis_ticket,
        Ok(serde_json::from_str(SCRIPT_JSON).expect("valid script")),
    ));
    assert!(session.script().is_loading());
}

#[tokio::test]
async fn test_jobs_settle_independently() -> anyhow::Result<()> {
    let studio = Studio::new(happy_driver(), StudioSettings::default());
    let analysis = sample_analysis();
    let title = "10 Foods That Destroy Your Metabolism";
    let mut session = Session::new();

    let ticket = session.analysis_mut().begin();
    session.analysis_mut().settle(ticket, Ok(analysis.clone()));

    let combos_ticket = session.combos_mut().begin();
    let script_ticket = session.script_mut().begin();
    assert!(session.is_busy());

    let (combos, script) = tokio::join!(
        studio.generate_combos(&analysis, title),
        studio.generate_script(&analysis, title),
    );
    assert!(session.script_mut().settle(script_ticket, script));
    assert!(session.combos_mut().settle(combos_ticket, combos));

    assert!(!session.is_busy());
    assert_eq!(session.analysis().result(), Some(&analysis));
    assert_eq!(session.combos().result().map(|c| c.len()), Some(3));
    assert!(session.script().result().is_some());

    // Restarting the script leaves the other slots alone.
    session.script_mut().begin();
    assert!(session.script().result().is_none());
    assert!(session.combos().result().is_some());
    assert!(session.analysis().result().is_some());
    Ok(())
}
