mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use embassy_time::Duration;
    use pulsestrip::color::Rgb;
    use pulsestrip::encoder::StripEncoder;
    use pulsestrip::frame::CapacityError;
    use pulsestrip::line::DataLine;
    use pulsestrip::runner::{RunnerConfig, StripRunner};
    use pulsestrip::sensor::SensorSampler;
    use pulsestrip::timing::Mhz16;

    const MID: u16 = 660;

    /// Counts bit-slots; every slot starts with one rising edge.
    #[derive(Clone)]
    struct CountingLine {
        pulses: Rc<Cell<usize>>,
    }

    impl CountingLine {
        fn new() -> Self {
            Self {
                pulses: Rc::new(Cell::new(0)),
            }
        }
    }

    impl DataLine for CountingLine {
        fn set_high(&mut self) {
            self.pulses.set(self.pulses.get() + 1);
        }

        fn set_low(&mut self) {}

        fn hold(&mut self, _ticks: u32) {}
    }

    /// Replays a fixed sequence of raw readings, cycling at the end.
    struct ScriptedSensor {
        values: Vec<u16>,
        cursor: usize,
    }

    impl ScriptedSensor {
        fn new(values: &[u16]) -> Self {
            Self {
                values: values.to_vec(),
                cursor: 0,
            }
        }
    }

    impl SensorSampler for ScriptedSensor {
        fn sample(&mut self) -> u16 {
            let value = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            value
        }
    }

    fn runner(
        led_count: usize,
        sensor: ScriptedSensor,
    ) -> Result<StripRunner<CountingLine, Mhz16, ScriptedSensor, 8>, CapacityError> {
        let config = RunnerConfig {
            led_count,
            midpoint: MID,
            frame_interval: Duration::from_millis(20),
        };
        StripRunner::new(StripEncoder::new(CountingLine::new()), sensor, &config)
    }

    #[test]
    fn tick_returns_the_configured_interval() {
        let mut runner = runner(2, ScriptedSensor::new(&[MID])).unwrap();
        assert_eq!(runner.tick(), Duration::from_millis(20));
        assert_eq!(runner.tick(), Duration::from_millis(20));
    }

    #[test]
    fn every_channel_gets_a_fresh_reading_in_strip_order() {
        // Six readings for two LEDs: r, g, b for LED 0, then LED 1.
        let sensor = ScriptedSensor::new(&[
            MID + 100, // -> 9
            MID + 255, // -> 63
            MID + 509, // -> 253
            MID,       // -> 0
            MID + 510, // -> 255
            MID - 100, // -> 9, symmetric side
        ]);
        let mut runner = runner(2, sensor).unwrap();
        runner.tick();
        assert_eq!(runner.frame().get(0), Some(Rgb::new(9, 63, 253)));
        assert_eq!(runner.frame().get(1), Some(Rgb::new(0, 255, 9)));
    }

    #[test]
    fn one_burst_per_tick() {
        let line = CountingLine::new();
        let pulses = line.pulses.clone();
        let config = RunnerConfig {
            led_count: 3,
            midpoint: MID,
            frame_interval: Duration::from_millis(20),
        };
        let mut runner: StripRunner<_, Mhz16, _, 8> = StripRunner::new(
            StripEncoder::new(line),
            ScriptedSensor::new(&[MID + 510]),
            &config,
        )
        .unwrap();
        runner.tick();
        runner.tick();
        // Two frames of 3 LEDs, 24 bit-slots each.
        assert_eq!(pulses.get(), 2 * 3 * 24);
    }

    #[test]
    fn frame_length_never_changes() {
        let mut runner = runner(5, ScriptedSensor::new(&[0, MID, 1023])).unwrap();
        for _ in 0..10 {
            runner.tick();
            assert_eq!(runner.frame().len(), 5);
        }
    }

    #[test]
    fn oversized_strip_is_rejected() {
        let result = runner(9, ScriptedSensor::new(&[MID]));
        assert_eq!(
            result.err(),
            Some(CapacityError {
                requested: 9,
                capacity: 8
            })
        );
    }
}
