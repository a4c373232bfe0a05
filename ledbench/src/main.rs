//! ledbench entry point
//!
//! With `baremetal` the image exports a C `main` that drives the board's debug
//! register. A host build runs the same sequence against a simulated register
//! and logs every write.

#![cfg_attr(feature = "baremetal", no_std, no_main)]

#[cfg(feature = "baremetal")]
mod baremetal {
    use core::panic::PanicInfo;

    #[unsafe(no_mangle)]
    pub extern "C" fn main() -> i32 {
        ledbench::run()
    }

    #[panic_handler]
    fn panic(_info: &PanicInfo) -> ! {
        loop {
            core::hint::spin_loop();
        }
    }
}

#[cfg(not(feature = "baremetal"))]
fn main() {
    use std::io::Write;

    use ledbench::{BenchConfig, Marker};
    use log::{Level, LevelFilter};

    env_logger::Builder::new()
        .filter_level(LevelFilter::Debug)
        .format(|buf, record| {
            let tag = match record.level() {
                Level::Error => "E",
                Level::Warn => "W",
                Level::Info => "I",
                Level::Debug => "D",
                Level::Trace => "T",
            };
            writeln!(buf, "[{}] {}", tag, record.args())
        })
        .init();

    let config = BenchConfig::selected();
    log::info!(
        "simulating debug register at {:#x} ({} calibration spins, {} workload iterations)",
        config.register_address,
        config.calibration_iterations,
        config.workload_iterations
    );

    let (summary, register) = ledbench::simulate(config, |value| match Marker::from_value(value) {
        Some(marker) => log::info!("debug register <- {:#04x} ({:?})", value, marker),
        None => log::warn!("debug register <- {:#04x} (not a marker)", value),
    });

    if !register.trace().is_bracketed() {
        log::warn!("unexpected write trace: {:?}", register.trace().as_slice());
    }
    std::process::exit(summary.exit_status());
}
