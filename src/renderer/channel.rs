/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use std::thread::{Builder, JoinHandle};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::renderer::Renderer;
use crate::shared::Notification;

/**
 * Forwards notifications to a renderer running on its own thread.
 *
 * The channel preserves order, so the renderer thread sees notifications in the
 * order the interpreter produced them. Dropping the sender ends the renderer
 * thread after it has drained the channel and flushed.
 */
pub struct ChannelRenderer {
    renderer_tx: cbc::Sender<Notification>,
}

impl ChannelRenderer {
    pub fn new(renderer_tx: cbc::Sender<Notification>) -> ChannelRenderer {
        ChannelRenderer { renderer_tx }
    }
}

impl Renderer for ChannelRenderer {
    fn notify(&mut self, notification: &Notification) {
        if let Err(e) = self.renderer_tx.send(notification.clone()) {
            log::error!("renderer thread is gone: {}", e);
        }
    }
}

/// Starts `renderer` on a thread named `renderer` and returns the forwarding end.
pub fn spawn_renderer<R>(mut renderer: R) -> std::io::Result<(ChannelRenderer, JoinHandle<R>)>
where
    R: Renderer + Send + 'static,
{
    let (renderer_tx, renderer_rx) = cbc::unbounded::<Notification>();

    let renderer_thread = Builder::new().name("renderer".into());
    let handle = renderer_thread.spawn(move || {
        for notification in renderer_rx.iter() {
            renderer.notify(&notification);
        }
        renderer.flush();
        renderer
    })?;

    Ok((ChannelRenderer::new(renderer_tx), handle))
}
