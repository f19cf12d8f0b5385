use thiserror::Error;
use tokio::{
    sync::mpsc::{
        channel,
        error::{SendError, TrySendError},
        Sender,
    },
    task::{JoinError, JoinHandle},
};

use crate::constants::BUFFER_SIZE;

use super::{
    host::Host,
    mapper::GestureMapper,
    pointer::PointerEvent,
    region::GeometryProvider,
};

/// Possible errors for a pointer listener
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("failed to send pointer event to virtual gamepad")]
    SendError(SendError<GamepadCommand>),
    #[error("failed to try to send pointer event to virtual gamepad")]
    TrySendError(TrySendError<GamepadCommand>),
    #[error("virtual gamepad is no longer attached")]
    ChannelClosed,
    #[error("virtual gamepad task failed: {0}")]
    JoinError(#[from] JoinError),
}

impl From<SendError<GamepadCommand>> for ClientError {
    fn from(err: SendError<GamepadCommand>) -> Self {
        Self::SendError(err)
    }
}

impl From<TrySendError<GamepadCommand>> for ClientError {
    fn from(err: TrySendError<GamepadCommand>) -> Self {
        match err {
            TrySendError::Closed(_) => Self::ChannelClosed,
            TrySendError::Full(_) => Self::TrySendError(err),
        }
    }
}

/// A [GamepadCommand] is a message that can be sent to an attached
/// [VirtualGamepad] over a channel.
#[derive(Debug, Clone)]
pub enum GamepadCommand {
    Pointer(PointerEvent),
    Detach,
}

/// Handle used by the platform's event dispatch to deliver pointer events to
/// an attached [VirtualGamepad]. Events are processed in the order they are
/// sent.
#[derive(Debug, Clone)]
pub struct PointerListener {
    tx: Sender<GamepadCommand>,
}

impl From<Sender<GamepadCommand>> for PointerListener {
    fn from(tx: Sender<GamepadCommand>) -> Self {
        PointerListener::new(tx)
    }
}

impl PointerListener {
    /// Create a new [PointerListener] from the given channel
    pub fn new(tx: Sender<GamepadCommand>) -> Self {
        Self { tx }
    }

    /// Deliver the given pointer event, waiting for channel capacity
    pub async fn dispatch(&self, event: PointerEvent) -> Result<(), ClientError> {
        self.tx.send(GamepadCommand::Pointer(event)).await?;
        Ok(())
    }

    /// Deliver the given pointer event without waiting. Useful from
    /// synchronous event callbacks.
    pub fn try_dispatch(&self, event: PointerEvent) -> Result<(), ClientError> {
        self.tx.try_send(GamepadCommand::Pointer(event))?;
        Ok(())
    }

    /// Returns true if the virtual gamepad no longer receives events
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Completes when the virtual gamepad stops receiving events.
    pub async fn closed(&self) {
        self.tx.closed().await
    }
}

/// Owns the one pointer subscription of a touch overlay. The subscription is
/// created when the gamepad is attached and released when it is detached or
/// dropped, no matter how often the overlay is rendered in between.
#[derive(Debug)]
pub struct VirtualGamepad<G, H> {
    listener: PointerListener,
    task: Option<JoinHandle<GestureMapper<G, H>>>,
}

impl<G, H> VirtualGamepad<G, H>
where
    G: GeometryProvider + Send + 'static,
    H: Host + Send + 'static,
{
    /// Start receiving pointer events for the given mapper. Must be called
    /// from within a tokio runtime.
    pub fn attach(mapper: GestureMapper<G, H>) -> Self {
        let (tx, mut rx) = channel(BUFFER_SIZE);
        let task = tokio::task::spawn(async move {
            let mut mapper = mapper;
            log::info!("Virtual gamepad attached");
            while let Some(command) = rx.recv().await {
                match command {
                    GamepadCommand::Pointer(event) => {
                        mapper.handle_event(&event);
                    }
                    GamepadCommand::Detach => break,
                }
            }
            log::info!("Virtual gamepad detached");
            mapper
        });

        Self {
            listener: PointerListener::new(tx),
            task: Some(task),
        }
    }

    /// Returns a handle to deliver pointer events with
    pub fn listener(&self) -> PointerListener {
        self.listener.clone()
    }

    /// Stop receiving pointer events and return the mapper. Events sent
    /// before detaching are processed first.
    pub async fn detach(mut self) -> Result<GestureMapper<G, H>, ClientError> {
        let Some(task) = self.task.take() else {
            return Err(ClientError::ChannelClosed);
        };
        if let Err(e) = self.listener.tx.send(GamepadCommand::Detach).await {
            log::debug!("Virtual gamepad stopped before detaching: {e}");
        }
        let mapper = task.await?;
        Ok(mapper)
    }
}

impl<G, H> Drop for VirtualGamepad<G, H> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            log::debug!("Dropping attached virtual gamepad");
            task.abort();
        }
    }
}
