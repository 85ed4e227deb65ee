//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: before/after order, before stopping the chain, Reply stopping the chain and being passed
//! to after, Ignore falling through to the next handler, and handler errors propagating.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use fuel_core::{BotError, Chat, Handler, HandlerResponse, Message, User};
use handler_chain::HandlerChain;

fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        created_at: Utc::now(),
    }
}

/// **Test: Empty chain returns Continue.**
#[tokio::test]
async fn test_empty_chain_returns_continue() {
    let chain = HandlerChain::new();
    assert!(chain.is_empty());

    let result = chain.handle(&create_test_message("500 40")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
}

/// **Test: Handler before and after run once; handle runs once.**
#[tokio::test]
async fn test_handler_chain_with_handler() {
    let before_count = Arc::new(AtomicUsize::new(0));
    let after_count = Arc::new(AtomicUsize::new(0));
    let handle_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(TestBeforeAfterHandler {
            before_count: before_count.clone(),
            after_count: after_count.clone(),
        }))
        .add_handler(Arc::new(CountingHandler {
            handle_count: handle_count.clone(),
            response: HandlerResponse::Continue,
        }));
    assert_eq!(chain.len(), 2);

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(before_count.load(Ordering::SeqCst), 1);
    assert_eq!(handle_count.load(Ordering::SeqCst), 1);
    assert_eq!(after_count.load(Ordering::SeqCst), 1);
}

/// **Test: before returning false stops the chain; handle is not run.**
#[tokio::test]
async fn test_before_false_stops_chain() {
    struct BlockingHandler;

    #[async_trait::async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _message: &Message) -> fuel_core::Result<bool> {
            Ok(false)
        }
    }

    let handle_count = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(Arc::new(CountingHandler {
            handle_count: handle_count.clone(),
            response: HandlerResponse::Continue,
        }));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(handle_count.load(Ordering::SeqCst), 0);
}

/// **Test: Reply stops the handle phase, later handlers are skipped, after sees the reply.**
#[tokio::test]
async fn test_reply_stops_chain_and_passes_to_after() {
    struct CaptureResponseHandler {
        seen: Arc<Mutex<Option<HandlerResponse>>>,
    }

    #[async_trait::async_trait]
    impl Handler for CaptureResponseHandler {
        async fn after(&self, _message: &Message, response: &HandlerResponse) -> fuel_core::Result<()> {
            *self.seen.lock().unwrap() = Some(response.clone());
            Ok(())
        }
    }

    let seen = Arc::new(Mutex::new(None));
    let later_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CaptureResponseHandler { seen: seen.clone() }))
        .add_handler(Arc::new(CountingHandler {
            handle_count: Arc::new(AtomicUsize::new(0)),
            response: HandlerResponse::Reply("Consumption: 8.00 l/100km".to_string()),
        }))
        .add_handler(Arc::new(CountingHandler {
            handle_count: later_count.clone(),
            response: HandlerResponse::Continue,
        }));

    let result = chain.handle(&create_test_message("500 40")).await.unwrap();

    let expected = HandlerResponse::Reply("Consumption: 8.00 l/100km".to_string());
    assert_eq!(result, expected);
    assert_eq!(*seen.lock().unwrap(), Some(expected));
    assert_eq!(later_count.load(Ordering::SeqCst), 0);
}

/// **Test: Ignore falls through to the next handler.**
#[tokio::test]
async fn test_ignore_falls_through() {
    let chain = HandlerChain::new()
        .add_handler(Arc::new(CountingHandler {
            handle_count: Arc::new(AtomicUsize::new(0)),
            response: HandlerResponse::Ignore,
        }))
        .add_handler(Arc::new(CountingHandler {
            handle_count: Arc::new(AtomicUsize::new(0)),
            response: HandlerResponse::Reply("second".to_string()),
        }));

    let result = chain.handle(&create_test_message("x")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("second".to_string()));
}

/// **Test: A failing handler propagates its error.**
#[tokio::test]
async fn test_handler_error_propagates() {
    struct FailingHandler;

    #[async_trait::async_trait]
    impl Handler for FailingHandler {
        async fn handle(&self, _message: &Message) -> fuel_core::Result<HandlerResponse> {
            Err(BotError::Handler("boom".to_string()))
        }
    }

    let chain = HandlerChain::new().add_handler(Arc::new(FailingHandler));

    let err = chain.handle(&create_test_message("x")).await.unwrap_err();

    assert!(matches!(err, BotError::Handler(ref m) if m == "boom"));
}

/// **Test: before runs first→last, after runs last→first.**
#[tokio::test]
async fn test_multiple_handlers_executed_in_order() {
    let order = Arc::new(Mutex::new(Vec::new()));

    struct OrderHandler {
        name: String,
        order: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait::async_trait]
    impl Handler for OrderHandler {
        async fn before(&self, _message: &Message) -> fuel_core::Result<bool> {
            self.order.lock().unwrap().push(format!("before_{}", self.name));
            Ok(true)
        }

        async fn after(&self, _message: &Message, _response: &HandlerResponse) -> fuel_core::Result<()> {
            self.order.lock().unwrap().push(format!("after_{}", self.name));
            Ok(())
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(OrderHandler {
            name: "first".to_string(),
            order: order.clone(),
        }))
        .add_handler(Arc::new(OrderHandler {
            name: "second".to_string(),
            order: order.clone(),
        }));

    chain.handle(&create_test_message("test")).await.unwrap();

    let executed = order.lock().unwrap();
    assert_eq!(
        *executed,
        vec!["before_first", "before_second", "after_second", "after_first"]
    );
}

// --- Helpers used by tests ---

struct TestBeforeAfterHandler {
    before_count: Arc<AtomicUsize>,
    after_count: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl Handler for TestBeforeAfterHandler {
    async fn before(&self, _message: &Message) -> fuel_core::Result<bool> {
        self.before_count.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> fuel_core::Result<()> {
        self.after_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct CountingHandler {
    handle_count: Arc<AtomicUsize>,
    response: HandlerResponse,
}

#[async_trait::async_trait]
impl Handler for CountingHandler {
    async fn handle(&self, _message: &Message) -> fuel_core::Result<HandlerResponse> {
        self.handle_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}
