//! Hand-off of navigation commands to the UI-owning thread.
//!
//! Any thread can hold a [`UiHandle`] and send commands. They run, in send
//! order, when the UI thread calls [`UiQueue::drain`] with its navigator.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::error::{KitError, Result};

use super::command::{NavCommand, Navigator};

/// Receiving end, owned by the UI thread.
pub struct UiQueue<C> {
    rx: Receiver<NavCommand<C>>,
}

/// Cloneable sending end.
pub struct UiHandle<C> {
    tx: Sender<NavCommand<C>>,
}

impl<C> Clone for UiHandle<C> {
    fn clone(&self) -> Self {
        Self { tx: self.tx.clone() }
    }
}

impl<C> UiQueue<C> {
    /// Create a queue and its first sending handle.
    pub fn channel() -> (Self, UiHandle<C>) {
        let (tx, rx) = mpsc::channel();
        (Self { rx }, UiHandle { tx })
    }

    /// Perform every pending command. Returns how many ran.
    ///
    /// Stops at the first failing command; later commands stay queued.
    pub fn drain<N>(&self, navigator: &mut N) -> Result<usize>
    where
        N: Navigator<Controller = C>,
    {
        let mut performed = 0;
        loop {
            match self.rx.try_recv() {
                Ok(command) => {
                    navigator.perform(command)?;
                    performed += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return Ok(performed),
            }
        }
    }

    /// Run `command` immediately. Only call this on the UI thread.
    pub fn perform_now<N>(&self, navigator: &mut N, command: NavCommand<C>) -> Result<()>
    where
        N: Navigator<Controller = C>,
    {
        navigator.perform(command)
    }
}

impl<C> UiHandle<C> {
    /// Queue a command for the UI thread.
    pub fn send(&self, command: NavCommand<C>) -> Result<()> {
        self.tx.send(command).map_err(|_| KitError::Navigation {
            message: "UI queue has been dropped".to_string(),
        })
    }

    pub fn push(&self, target: C) -> Result<()> {
        self.send(NavCommand::push(target))
    }

    pub fn pop(&self) -> Result<()> {
        self.send(NavCommand::pop())
    }

    pub fn present(&self, target: C) -> Result<()> {
        self.send(NavCommand::present(target))
    }

    pub fn present_cross_dissolve(&self, target: C) -> Result<()> {
        self.send(NavCommand::present_cross_dissolve(target))
    }

    pub fn dismiss(&self) -> Result<()> {
        self.send(NavCommand::dismiss())
    }

    pub fn show_alert(&self, title: impl Into<String>, message: Option<String>) -> Result<()> {
        self.send(NavCommand::alert(title, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    /// Records commands as short labels.
    #[derive(Default)]
    struct Recorder {
        log: Vec<String>,
        fail_on: Option<&'static str>,
    }

    impl Navigator for Recorder {
        type Controller = &'static str;

        fn perform(&mut self, command: NavCommand<&'static str>) -> Result<()> {
            let label = match command {
                NavCommand::Push { target, .. } => format!("push {target}"),
                NavCommand::Pop { .. } => "pop".to_string(),
                NavCommand::Present { target, .. } => format!("present {target}"),
                NavCommand::Dismiss { .. } => "dismiss".to_string(),
                NavCommand::PopToRoot { .. } => "root".to_string(),
                NavCommand::ReplaceRoot { target, .. } => format!("replace {target}"),
                NavCommand::ShowAlert(alert) => format!("alert {}", alert.title),
            };
            if self.fail_on == Some(label.as_str()) {
                return Err(KitError::Navigation { message: label });
            }
            self.log.push(label);
            Ok(())
        }
    }

    #[test]
    fn test_nothing_runs_until_drained() {
        let (queue, handle) = UiQueue::channel();
        handle.push("detail").unwrap();

        let mut nav = Recorder::default();
        assert!(nav.log.is_empty());
        assert_eq!(queue.drain(&mut nav).unwrap(), 1);
        assert_eq!(nav.log, vec!["push detail"]);
        assert_eq!(queue.drain(&mut nav).unwrap(), 0);
    }

    #[test]
    fn test_commands_from_other_thread_keep_order() {
        let (queue, handle) = UiQueue::channel();
        let worker = handle.clone();
        thread::spawn(move || {
            worker.present("login").unwrap();
            worker.show_alert("Welcome", None).unwrap();
            worker.dismiss().unwrap();
        })
        .join()
        .unwrap();
        handle.pop().unwrap();

        let mut nav = Recorder::default();
        assert_eq!(queue.drain(&mut nav).unwrap(), 4);
        assert_eq!(nav.log, vec!["present login", "alert Welcome", "dismiss", "pop"]);
    }

    #[test]
    fn test_drain_stops_on_error() {
        let (queue, handle) = UiQueue::channel();
        handle.push("a").unwrap();
        handle.pop().unwrap();
        handle.push("b").unwrap();

        let mut nav = Recorder { fail_on: Some("pop"), ..Default::default() };
        assert!(queue.drain(&mut nav).is_err());
        assert_eq!(nav.log, vec!["push a"]);

        nav.fail_on = None;
        assert_eq!(queue.drain(&mut nav).unwrap(), 1);
        assert_eq!(nav.log, vec!["push a", "push b"]);
    }

    #[test]
    fn test_perform_now_skips_queue() {
        let (queue, handle) = UiQueue::channel();
        handle.present_cross_dissolve("overlay").unwrap();

        let mut nav = Recorder::default();
        queue.perform_now(&mut nav, NavCommand::pop_to_root(false)).unwrap();
        queue.drain(&mut nav).unwrap();
        assert_eq!(nav.log, vec!["root", "present overlay"]);
    }

    #[test]
    fn test_send_after_queue_dropped() {
        let (queue, handle) = UiQueue::<&'static str>::channel();
        drop(queue);
        assert!(handle.pop().is_err());
    }
}
