//! Integration tests for the Rainbow animation

mod common;
use common::*;

use strip_animations::colors;
use strip_animations::{Animation, ConfigError, Rainbow, RainbowConfig, UpdatePolicy};

#[test]
fn defaults_to_whole_zone_with_one_hue_per_pixel() {
    let mut rainbow = Rainbow::<_, 8>::new(4, MockSink::new(), &RainbowConfig::new()).unwrap();

    assert_eq!(rainbow.policy(), UpdatePolicy::WholeZone);
    assert_eq!(rainbow.table().len(), 4);
    assert_eq!(rainbow.period(), 4);

    for t in 0..4 {
        assert_eq!(next_frame(&mut rainbow), vec![colors::wheel(t, 4); 4]);
    }
    assert_eq!(rainbow.iteration(), 0);
}

#[test]
fn scroll_counter_cycles_with_least_common_multiple() {
    let config = RainbowConfig::new().steps(2).strip_as_whole(false);
    let mut rainbow = Rainbow::<_, 2>::new(3, MockSink::new(), &config).unwrap();
    assert_eq!(rainbow.period(), 6);

    let first = next_frame(&mut rainbow);
    for _ in 1..6 {
        assert_ne!(rainbow.iteration(), 0);
        next_frame(&mut rainbow);
    }

    // Exactly six ticks bring the counter and the frame back to the start.
    assert_eq!(rainbow.iteration(), 0);
    assert_eq!(next_frame(&mut rainbow), first);
}

#[test]
fn scroll_offsets_each_pixel_by_its_index() {
    let config = RainbowConfig::new().steps(5).strip_as_whole(false);
    let mut rainbow = Rainbow::<_, 5>::new(3, MockSink::new(), &config).unwrap();
    let table = rainbow.table().to_vec();

    for (t, frame) in frames(&mut rainbow, 20).iter().enumerate() {
        for (pos, color) in frame.iter().enumerate() {
            assert_eq!(*color, table[(pos + t) % 5], "pixel {} at tick {}", pos, t);
        }
    }
}

#[test]
fn scroll_on_red_cyan_wheel_alternates() {
    let config = RainbowConfig::new().steps(2).strip_as_whole(false);
    let mut rainbow = Rainbow::<_, 2>::new(3, MockSink::new(), &config).unwrap();
    let cyan = colors::pack(0, 255, 255);

    assert_eq!(next_frame(&mut rainbow), vec![RED, cyan, RED]);
    assert_eq!(next_frame(&mut rainbow), vec![cyan, RED, cyan]);
}

#[test]
fn steps_default_to_strip_length() {
    let config = RainbowConfig::new().strip_as_whole(false);
    let rainbow = Rainbow::<_, 16>::new(12, MockSink::new(), &config).unwrap();
    assert_eq!(rainbow.table().len(), 12);
    assert_eq!(rainbow.period(), 12);
}

#[test]
fn zero_steps_are_rejected() {
    let config = RainbowConfig::new().steps(0);
    let result = Rainbow::<_, 8>::new(3, MockSink::new(), &config);
    assert!(matches!(result, Err(ConfigError::ZeroSteps)));

    let config = RainbowConfig::new().steps(0).strip_as_whole(false);
    let result = Rainbow::<_, 8>::new(3, MockSink::new(), &config);
    assert!(matches!(result, Err(ConfigError::ZeroSteps)));
}

#[test]
fn zero_length_is_rejected() {
    let config = RainbowConfig::new().steps(4).strip_as_whole(false);
    let result = Rainbow::<_, 8>::new(0, MockSink::new(), &config);
    assert!(matches!(result, Err(ConfigError::ZeroLength)));
}

#[test]
fn writes_every_pixel_once_per_tick() {
    let config = RainbowConfig::new().steps(3).strip_as_whole(false);
    let mut rainbow = Rainbow::<_, 3>::new(7, MockSink::new(), &config).unwrap();

    for _ in 0..10 {
        assert_eq!(next_frame(&mut rainbow).len(), 7);
    }
    assert_eq!(rainbow.sink().presents(), 0);
}
