//! Entrance animations: viewport reveals, the skill cascade, typewriters and
//! the load-time hero stagger.

pub mod load;
pub mod reveal;
pub mod typewriter;

use std::rc::Rc;

use crate::utils::dom::Surface;
use crate::utils::timers::Scheduler;

/// Progress of a one-shot animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealing,
    Done,
}

/// Runs `step` on each item, `lead_in + index * every` ms from now. `done`
/// runs right after the last item (or after `lead_in` when there are none).
pub fn stagger(
    scheduler: &Rc<dyn Scheduler>,
    items: Vec<Rc<dyn Surface>>,
    lead_in: u32,
    every: u32,
    step: Rc<dyn Fn(&dyn Surface)>,
    done: Box<dyn FnOnce()>,
) {
    if items.is_empty() {
        scheduler.timeout(lead_in, done);
        return;
    }
    let last = items.len() - 1;
    let mut done = Some(done);
    for (index, item) in items.into_iter().enumerate() {
        let step = Rc::clone(&step);
        let finish = if index == last { done.take() } else { None };
        scheduler.timeout(
            lead_in + index as u32 * every,
            Box::new(move || {
                step(item.as_ref());
                if let Some(finish) = finish {
                    finish();
                }
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualScheduler, RecordingSurface};
    use std::cell::Cell;

    #[test]
    fn steps_fire_at_staggered_offsets() {
        let manual = Rc::new(ManualScheduler::default());
        let scheduler: Rc<dyn Scheduler> = manual.clone();
        let items: Vec<Rc<RecordingSurface>> = (0..3).map(|_| Rc::new(RecordingSurface::default())).collect();
        let finished = Rc::new(Cell::new(false));
        let flag = finished.clone();

        stagger(
            &scheduler,
            items.iter().map(|i| i.clone() as Rc<dyn Surface>).collect(),
            0,
            200,
            Rc::new(|s: &dyn Surface| s.set_style("opacity", "1")),
            Box::new(move || flag.set(true)),
        );

        manual.advance(0);
        assert_eq!(items[0].style("opacity").as_deref(), Some("1"));
        assert_eq!(items[1].style("opacity"), None);
        manual.advance(200);
        assert_eq!(items[1].style("opacity").as_deref(), Some("1"));
        assert!(!finished.get());
        manual.advance(200);
        assert_eq!(items[2].style("opacity").as_deref(), Some("1"));
        assert!(finished.get());
    }

    #[test]
    fn empty_group_finishes_after_lead_in() {
        let manual = Rc::new(ManualScheduler::default());
        let scheduler: Rc<dyn Scheduler> = manual.clone();
        let finished = Rc::new(Cell::new(false));
        let flag = finished.clone();

        stagger(&scheduler, Vec::new(), 300, 100, Rc::new(|_: &dyn Surface| {}), Box::new(move || flag.set(true)));
        manual.advance(299);
        assert!(!finished.get());
        manual.advance(1);
        assert!(finished.get());
    }
}
