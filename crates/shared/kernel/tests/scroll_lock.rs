use proptest::prelude::*;
use sprouts_kernel::ui::scroll_lock::{BodyScrollLock, LOCKED_OVERFLOW};

proptest! {
    #[test]
    fn body_stays_locked_until_the_last_release(
        order in (1usize..12).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle()),
        initial in "[a-z]{0,8}",
    ) {
        let body = BodyScrollLock::new(initial.clone());
        let mut guards: Vec<_> = order.iter().map(|_| Some(body.acquire())).collect();
        prop_assert_eq!(body.active_locks(), order.len());

        for (released, index) in order.iter().enumerate() {
            guards[*index].take();
            let remaining = order.len() - released - 1;

            prop_assert_eq!(body.active_locks(), remaining);
            if remaining > 0 {
                prop_assert_eq!(body.overflow(), LOCKED_OVERFLOW);
            } else {
                prop_assert_eq!(body.overflow(), initial.clone());
            }
        }
    }
}

#[test]
fn clones_share_one_body() {
    let body = BodyScrollLock::new("auto");
    let modal = body.clone();

    let guard = modal.acquire();
    assert!(body.is_locked());

    drop(guard);
    assert_eq!(body.overflow(), "auto");
}
