pub mod dom;
pub mod events;
pub mod logging;
pub mod observer;
pub mod random;
pub mod timers;
