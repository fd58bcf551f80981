pub const JUNGLE_NAME: &str = "AmbienceJungle";

pub const JUNGLE_RAND_FACTOR: i32 = 22;

// Duplicates are intentional: repeated entries weight the pick.
pub const JUNGLE_SOUNDS: [&str; 24] = [
    "sounds/shaders/generic_54_monkey_chirp_12.ksnd",
    "sounds/shaders/generic_184.ksnd",
    "sounds/shaders/generic_183.ksnd",
    "sounds/shaders/bird_call_3.ksnd",
    "sounds/shaders/monkey_chip_scream_3.ksnd",
    "sounds/shaders/generic_183.ksnd",
    "sounds/shaders/generic_55_monkey_chirp_13.ksnd",
    "sounds/shaders/generic_30_bird_call_13.ksnd",
    "sounds/shaders/generic_55_monkey_chirp_13.ksnd",
    "sounds/shaders/bird_call_4.ksnd",
    "sounds/shaders/monkey_chip_scream_3.ksnd",
    "sounds/shaders/monkey_chip_scream_4.ksnd",
    "sounds/shaders/monkey_chip_scream_4.ksnd",
    "sounds/shaders/generic_54_monkey_chirp_12.ksnd",
    "sounds/shaders/generic_28_bird_call_11.ksnd",
    "sounds/shaders/generic_51_monkey_chirp_9.ksnd",
    "sounds/shaders/generic_56_monkey_chirp_14.ksnd",
    "sounds/shaders/generic_55_monkey_chirp_13.ksnd",
    "sounds/shaders/generic_49_monkey_chirp_7.ksnd",
    "sounds/shaders/generic_50_monkey_chirp_8.ksnd",
    "sounds/shaders/generic_51_monkey_chirp_9.ksnd",
    "sounds/shaders/generic_52_monkey_chirp_10.ksnd",
    "sounds/shaders/generic_53_monkey_chirp_11.ksnd",
    "sounds/shaders/generic_184.ksnd",
];
