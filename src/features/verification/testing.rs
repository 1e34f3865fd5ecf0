//! In-memory stand-ins for the verification API and browser timers.

use super::{client::VerificationApi, redirect::Scheduler};
use crate::app_lib::{ApiResponse, AppError};
use serde::Serialize;
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    future::Future,
    rc::{Rc, Weak},
};
use tokio::sync::oneshot;

/// Scripted answer for one request.
pub enum Reply {
    Respond(ApiResponse),
    Fail(AppError),
    /// Stays in flight until the paired sender fires.
    Gated(oneshot::Receiver<ApiResponse>),
}

impl Reply {
    pub fn status(status: u16, body: &str) -> Self {
        Reply::Respond(ApiResponse::new(status, body))
    }

    pub fn gated() -> (Self, oneshot::Sender<ApiResponse>) {
        let (sender, receiver) = oneshot::channel();
        (Reply::Gated(receiver), sender)
    }
}

/// Records every request and answers from a queue of replies.
#[derive(Clone, Default)]
pub struct FakeApi {
    replies: Rc<RefCell<VecDeque<Reply>>>,
    calls: Rc<RefCell<Vec<(String, serde_json::Value)>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(replies: impl IntoIterator<Item = Reply>) -> Self {
        let api = Self::new();
        api.replies.borrow_mut().extend(replies);
        api
    }

    pub fn push(&self, reply: Reply) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn calls(&self) -> Vec<(String, serde_json::Value)> {
        self.calls.borrow().clone()
    }
}

impl VerificationApi for FakeApi {
    fn post_json<B: Serialize>(
        &self,
        path: &'static str,
        body: &B,
    ) -> impl Future<Output = Result<ApiResponse, AppError>> {
        let body = serde_json::to_value(body).unwrap_or(serde_json::Value::Null);
        self.calls.borrow_mut().push((path.to_string(), body));
        let reply = self.replies.borrow_mut().pop_front();

        async move {
            match reply {
                Some(Reply::Respond(response)) => Ok(response),
                Some(Reply::Fail(err)) => Err(err),
                Some(Reply::Gated(receiver)) => receiver
                    .await
                    .map_err(|_| AppError::Network("gate dropped".to_string())),
                None => Err(AppError::Network("no scripted reply".to_string())),
            }
        }
    }
}

type Task = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

/// Timer driven by hand through [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    now: Rc<Cell<u64>>,
    timers: Rc<RefCell<Vec<(u64, Task)>>>,
}

/// Cancels its timer when dropped, like a browser timeout handle.
pub struct ManualHandle(Weak<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(task) = self.0.upgrade() {
            task.borrow_mut().take();
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward and runs every task that has come due.
    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get() + millis);
        let now = self.now.get();
        let due: Vec<Task> = {
            let mut timers = self.timers.borrow_mut();
            let (due, waiting): (Vec<_>, Vec<_>) =
                timers.drain(..).partition(|(at, _)| *at <= now);
            *timers = waiting;
            due.into_iter().map(|(_, task)| task).collect()
        };
        for task in due {
            let job = task.borrow_mut().take();
            if let Some(job) = job {
                job();
            }
        }
    }

    /// Timers scheduled and neither fired nor cancelled.
    pub fn armed(&self) -> usize {
        self.timers
            .borrow()
            .iter()
            .filter(|(_, task)| task.borrow().is_some())
            .count()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let task: Task = Rc::new(RefCell::new(Some(task)));
        let handle = ManualHandle(Rc::downgrade(&task));
        self.timers
            .borrow_mut()
            .push((self.now.get() + u64::from(delay_ms), task));
        handle
    }
}

/// Navigator closure plus the list of paths it was asked to visit.
pub fn recording_navigator() -> (impl Fn(&str) + Clone + 'static, Rc<RefCell<Vec<String>>>) {
    let visited = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&visited);
    let navigate = move |path: &str| sink.borrow_mut().push(path.to_string());
    (navigate, visited)
}
