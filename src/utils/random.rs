use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;

pub type SharedRng = Rc<RefCell<SmallRng>>;

/// Seeds from `Math.random`, since `wasm32-unknown-unknown` has no OS entropy.
pub fn browser_rng() -> SharedRng {
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    seeded_rng(seed)
}

pub fn seeded_rng(seed: u64) -> SharedRng {
    Rc::new(RefCell::new(SmallRng::seed_from_u64(seed)))
}
