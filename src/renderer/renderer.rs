use crate::shared::{Location, Notification};

/**
 * Receiver of state-change notifications.
 *
 * The interpreter calls `notify` once per notification, strictly after the
 * mutation it reports. The default `notify` dispatches to the `on_*` hooks, which
 * all default to doing nothing, so an implementation overrides only what it draws.
 * Nothing a renderer does feeds back into the interpreter.
 */
pub trait Renderer {
    fn on_init(&mut self, _floors: u8, _elevators: u8) {}
    fn on_person_created(&mut self, _name: &str, _floor: u8) {}
    fn on_person_removed(&mut self, _name: &str) {}
    fn on_person_location_changed(&mut self, _name: &str, _location: Location) {}
    fn on_person_anger_changed(&mut self, _name: &str, _anger: u8) {}
    fn on_elevator_door(&mut self, _elevator: u8, _open: bool) {}
    fn on_elevator_moved(&mut self, _elevator: u8, _floor: u8, _slot: u32, _rank: u32) {}
    fn on_time_updated(&mut self, _time: &str) {}
    fn on_warning(&mut self, _count: u32, _message: &str) {}
    fn on_finish(&mut self, _message: &str, _warnings: u32) {}

    fn notify(&mut self, notification: &Notification) {
        match notification {
            Notification::Init { floors, elevators } => self.on_init(*floors, *elevators),
            Notification::PersonCreated { name, floor } => self.on_person_created(name, *floor),
            Notification::PersonRemoved { name } => self.on_person_removed(name),
            Notification::PersonLocationChanged { name, location } => {
                self.on_person_location_changed(name, *location)
            }
            Notification::PersonAngerChanged { name, anger } => {
                self.on_person_anger_changed(name, *anger)
            }
            Notification::ElevatorDoor { elevator, open } => self.on_elevator_door(*elevator, *open),
            Notification::ElevatorMoved {
                elevator,
                floor,
                slot,
                rank,
            } => self.on_elevator_moved(*elevator, *floor, *slot, *rank),
            Notification::TimeUpdated { time } => self.on_time_updated(time),
            Notification::Warning { count, message } => self.on_warning(*count, message),
            Notification::Finish { message, warnings } => self.on_finish(message, *warnings),
        }
    }

    /// Called once the stream has ended normally.
    fn flush(&mut self) {}
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn notify(&mut self, notification: &Notification) {
        (**self).notify(notification)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}

/// Headless renderer. Drops everything.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}

/// Keeps every notification in arrival order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub notifications: Vec<Notification>,
    pub flushed: bool,
}

#[cfg(test)]
impl RecordingRenderer {
    pub fn new() -> RecordingRenderer {
        RecordingRenderer::default()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.notifications
            .iter()
            .filter_map(|n| match n {
                Notification::Warning { message, .. } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Renderer for RecordingRenderer {
    fn notify(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }

    fn flush(&mut self) {
        self.flushed = true;
    }
}

/// Log target used by `LogRenderer`.
pub const DISPLAY_TARGET: &str = "display";

/// Writes each notification as a log record under the `display` target.
#[derive(Debug, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn on_init(&mut self, floors: u8, elevators: u8) {
        log::info!(target: DISPLAY_TARGET, "building with {} floors and {} elevators", floors, elevators);
    }

    fn on_person_created(&mut self, name: &str, floor: u8) {
        log::info!(target: DISPLAY_TARGET, "{} enters at workspace {}", name, floor);
    }

    fn on_person_removed(&mut self, name: &str) {
        log::info!(target: DISPLAY_TARGET, "{} leaves", name);
    }

    fn on_person_location_changed(&mut self, name: &str, location: Location) {
        log::info!(target: DISPLAY_TARGET, "{} -> {}", name, location);
    }

    fn on_person_anger_changed(&mut self, name: &str, anger: u8) {
        log::debug!(target: DISPLAY_TARGET, "{} anger {}", name, anger);
    }

    fn on_elevator_door(&mut self, elevator: u8, open: bool) {
        let state = if open { "opens" } else { "closes" };
        log::info!(target: DISPLAY_TARGET, "elevator {} {}", elevator, state);
    }

    fn on_elevator_moved(&mut self, elevator: u8, floor: u8, slot: u32, rank: u32) {
        log::info!(
            target: DISPLAY_TARGET,
            "elevator {} at floor {} (slot {}, rank {})",
            elevator,
            floor,
            slot,
            rank
        );
    }

    fn on_time_updated(&mut self, time: &str) {
        log::info!(target: DISPLAY_TARGET, "Time: {}", time);
    }

    fn on_warning(&mut self, count: u32, message: &str) {
        log::info!(target: DISPLAY_TARGET, "{} {}", count, message);
    }

    fn on_finish(&mut self, message: &str, warnings: u32) {
        log::info!(target: DISPLAY_TARGET, "{} / Warnings: {}", message, warnings);
    }
}
