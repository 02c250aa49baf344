/*!
Share definitions and values across threads while attaching behaviour concurrently.
*/
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;
use variant_sum::{define, payload, Arg, Cases, Definition, Variant};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn definitions_and_values_are_shareable() {
    assert_send_sync::<Definition>();
    assert_send_sync::<Variant>();
    assert_send_sync::<Arg>();
}

#[test]
fn concurrent_attachment_and_dispatch() {
    let _ = env_logger::builder().is_test(true).try_init();
    let def = define(&["Ping", "Pong"]);
    let values: Arc<Vec<Variant>> = Arc::new(
        (0..16i32)
            .map(|i| {
                let name = if i % 2 == 0 { "Ping" } else { "Pong" };
                def.construct(name, payload![i]).unwrap()
            })
            .collect(),
    );
    let handles: Vec<_> = (0..8usize)
        .map(|n| {
            let def = def.clone();
            let values = values.clone();
            thread::spawn(move || {
                def.surface()
                    .insert_method(&format!("m{}", n), move |_, _| Arg::new(n));
                let cases = Cases::new()
                    .on("Ping", |args| *args[0].downcast_ref::<i32>().unwrap())
                    .otherwise(|| -1);
                values
                    .iter()
                    .map(|value| value.cases(&cases).unwrap())
                    .sum::<i32>()
            })
        })
        .collect();
    for handle in handles {
        // Pings are the even numbers below 16, pongs contribute -1 each
        assert_eq!(handle.join().unwrap(), 56 - 8);
    }
    assert_eq!(def.surface().len(), 8);
    for (n, value) in values.iter().enumerate().take(8) {
        assert_eq!(value.call_as::<usize>(&format!("m{}", n), &[]), Ok(n));
    }
}
