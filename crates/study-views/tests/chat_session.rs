mod common;

use std::sync::Arc;

use common::{FakeApi, citation, until};
use pretty_assertions::assert_eq;
use study_core::entities::{ChatReply, ChatTurn};
use study_core::enums::AskStatus;
use study_core::ids::WorkspaceId;
use study_views::{ChatSession, SessionContext, ViewError};

fn chat(api: &Arc<FakeApi>) -> ChatSession<FakeApi> {
    ChatSession::new(&SessionContext::new(Arc::clone(api)), WorkspaceId::new("7"))
}

#[tokio::test]
async fn answered_question_becomes_one_turn() {
    let api = FakeApi::signed_in();
    api.push_answer(ChatReply {
        answer: "...".into(),
        sources: vec![citation("notes.pdf", 12)],
    });
    let chat = chat(&api);

    chat.ask("What is chapter 3 about?").await.unwrap();

    assert_eq!(
        chat.transcript(),
        vec![ChatTurn {
            question: "What is chapter 3 about?".into(),
            answer: "...".into(),
            sources: vec![citation("notes.pdf", 12)],
        }]
    );
}

#[tokio::test]
async fn empty_question_sends_nothing() {
    let api = FakeApi::signed_in();
    let chat = chat(&api);

    assert_eq!(chat.ask("").await.unwrap(), None);
    assert_eq!(chat.ask("   \n").await.unwrap(), None);
    assert!(chat.transcript().is_empty());
    assert_eq!(api.total_calls(), 0);
}

#[tokio::test]
async fn turns_are_appended_in_order() {
    let api = FakeApi::signed_in();
    let chat = chat(&api);

    chat.ask("first").await.unwrap();
    chat.ask("  second  ").await.unwrap();

    let questions: Vec<_> = chat.transcript().into_iter().map(|t| t.question).collect();
    assert_eq!(questions, ["first", "second"]);
}

#[tokio::test]
async fn draft_is_cleared_only_on_success() {
    let api = FakeApi::signed_in();
    let chat = chat(&api);

    chat.set_draft("What is a monad?");
    api.fail("ask");
    assert!(chat.send_draft().await.is_err());
    assert_eq!(chat.draft(), "What is a monad?");
    assert!(chat.transcript().is_empty());
    assert!(chat.last_error().is_some());
    assert_eq!(chat.status(), AskStatus::Idle);

    api.recover("ask");
    let turn = chat.send_draft().await.unwrap().unwrap();
    assert_eq!(turn.question, "What is a monad?");
    assert_eq!(chat.draft(), "");
    assert_eq!(chat.last_error(), None);
    assert_eq!(chat.transcript().len(), 1);
}

#[tokio::test]
async fn second_ask_is_refused_while_one_is_pending() {
    let api = FakeApi::signed_in();
    let chat = chat(&api);
    let gate = api.hold();

    let (first, second) = tokio::join!(chat.ask("first"), async {
        until(|| chat.status() == AskStatus::Asking).await;
        let refused = chat.ask("second").await;
        gate.notify_one();
        refused
    });

    assert!(first.unwrap().is_some());
    assert!(matches!(second, Err(ViewError::AskInFlight)));
    assert_eq!(chat.transcript().len(), 1);
    assert_eq!(api.calls("ask"), 1);
}

#[tokio::test]
async fn late_answer_after_unmount_is_discarded() {
    let api = FakeApi::signed_in();
    let chat = chat(&api);
    let gate = api.hold();

    let (result, ()) = tokio::join!(chat.ask("anyone there?"), async {
        until(|| api.calls("ask") == 1).await;
        chat.unmount();
        gate.notify_one();
    });

    assert!(matches!(result, Err(ViewError::Unmounted)));
    assert!(chat.transcript().is_empty());
}
