//! oled-arcade firmware entry point.
//!
//! Boots the nRF52840, brings up the SSD1306 over TWIM0, seeds the game
//! PRNG from the hardware RNG and then runs the fixed-rate frame loop:
//! sample buttons → draw → update.

#![no_std]
#![no_main]

mod ui;

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::rng::{self, Rng};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Duration, Ticker};
use oled_arcade::config::FRAME_PERIOD_MS;
use oled_arcade::{GameHandler, Menu, Prng, MENU_ITEMS};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    RNG => rng::InterruptHandler<peripherals::RNG>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("oled-arcade starting");

    // Seed the game PRNG once; games never touch the hardware RNG.
    let mut seed = [0u8; 8];
    Rng::new(p.RNG, Irqs).blocking_fill_bytes(&mut seed);
    let mut rng = Prng::seeded(u64::from_le_bytes(seed));

    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);

    let mut display = ui::display::new(i2c);
    if let Err(e) = ui::display::start(&mut display) {
        error!("Display init failed: {}", e);
    }

    let buttons = ui::buttons::Buttons::new([
        Input::new(p.P0_11, Pull::Up),
        Input::new(p.P0_12, Pull::Up),
        Input::new(p.P0_24, Pull::Up),
        Input::new(p.P0_25, Pull::Up),
        Input::new(p.P1_08, Pull::Up),
    ]);

    let mut menu = Menu::new(MENU_ITEMS, GameHandler::with_defaults(&mut rng));
    let mut ticker = Ticker::every(Duration::from_millis(FRAME_PERIOD_MS));
    let mut display_ok = true;

    info!("Entering frame loop ({} ms)", FRAME_PERIOD_MS);
    loop {
        let input = buttons.sample();

        // Only report transitions so a missing panel doesn't flood RTT.
        match ui::display::render(&mut display, &menu) {
            Ok(()) if !display_ok => {
                info!("Display recovered");
                display_ok = true;
            }
            Err(e) if display_ok => {
                warn!("Frame dropped: {}", e);
                display_ok = false;
            }
            _ => {}
        }

        menu.update(input, &mut rng);
        ticker.next().await;
    }
}
