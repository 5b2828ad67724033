use futures::future::{FutureExt, LocalBoxFuture};
use gloo::timers::future::TimeoutFuture;
use shared::Delay;

/// Real browser timers behind the simulated latency
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        TimeoutFuture::new(ms).boxed_local()
    }
}
