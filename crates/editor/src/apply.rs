use futures::future::BoxFuture;

use crate::{effect::Effect, kill::Kill};

/// Host side executor for a single effect.
pub trait EffectSink {
    fn handle(&mut self, effect: Effect) -> BoxFuture<'_, anyhow::Result<()>>;
}

/// Run `effects` in order, each finished before the next one starts.
///
/// Settle delays are slept here and never reach the sink. Stopping via
/// `kill` drops the remaining effects without an error, a superseded
/// jump is not a failure.
pub async fn apply(
    effects: Vec<Effect>,
    sink: &mut dyn EffectSink,
    kill: &Kill,
) -> anyhow::Result<()> {
    for effect in effects {
        if kill.should_stop() {
            log::debug!("Navigation effects called off");
            return Ok(());
        }

        match effect {
            Effect::Settle(delay) => tokio::time::sleep(delay).await,
            effect => sink.handle(effect).await?,
        }
    }

    Ok(())
}
