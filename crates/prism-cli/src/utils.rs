use std::{fmt::Display, str::FromStr};

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use prism::{
    camera::Movement,
    math::vec::Vec3,
    scene::{
        examples::{DebugScene, RingScene},
        Scene,
    },
};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    #[default]
    Ring,
    Debug,
}

impl AvailableScene {
    /// The scene as it is `time` seconds after the start
    pub fn build(self, time: f32) -> Scene {
        match self {
            AvailableScene::Ring => RingScene { time }.into(),
            AvailableScene::Debug => DebugScene.into(),
        }
    }
}

#[derive(Default, Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Hash)]
pub enum AvailableOutput {
    #[default]
    File,
}

#[derive(Copy, Clone, Debug)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((a, b)) = s.split_once('x') else {
            return Err(anyhow!("Incorrect format, see help"));
        };
        let width: u32 = a.parse()?;
        let height: u32 = b.parse()?;
        if width == 0 || height == 0 {
            return Err(anyhow!("Dimensions must not be empty"));
        }

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f32; N]> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()?;
    values
        .try_into()
        .map_err(|values: Vec<f32>| anyhow!("Expected {N} comma separated values, got {}", values.len()))
}

#[derive(Copy, Clone, Debug)]
pub struct Triple(pub Vec3);

impl FromStr for Triple {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Triple(Vec3::from_array(parse_floats(s)?)))
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Pair(pub [f32; 2]);

impl FromStr for Pair {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Pair(parse_floats(s)?))
    }
}

/// One optional move per frame
#[derive(Clone, Debug, Default)]
pub struct Keys(pub Vec<Option<Movement>>);

impl Keys {
    pub fn at_frame(&self, frame: u32) -> Option<Movement> {
        self.0.get(frame as usize).copied().flatten()
    }
}

impl FromStr for Keys {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c.to_ascii_lowercase() {
                'w' => Ok(Some(Movement::Forward)),
                's' => Ok(Some(Movement::Backward)),
                'a' => Ok(Some(Movement::Left)),
                'd' => Ok(Some(Movement::Right)),
                'e' => Ok(Some(Movement::Up)),
                'q' => Ok(Some(Movement::Down)),
                '.' => Ok(None),
                c => Err(anyhow!("Unknown key `{c}`")),
            })
            .collect::<Result<_>>()
            .map(Keys)
    }
}

#[cfg(test)]
mod tests {
    use prism::camera::Movement;

    use super::{Dimensions, Keys, Pair, Triple};

    #[test]
    fn dimensions() {
        let d: Dimensions = "800x600".parse().unwrap();
        assert_eq!((d.width, d.height), (800, 600));
        assert_eq!(d.to_string(), "800x600");
        assert!("800".parse::<Dimensions>().is_err());
        assert!("0x600".parse::<Dimensions>().is_err());
    }

    #[test]
    fn floats() {
        let t: Triple = "-1.5, 0,2".parse().unwrap();
        assert_eq!(t.0.to_array(), [-1.5, 0.0, 2.0]);
        assert!("1,2".parse::<Triple>().is_err());
        let p: Pair = "3,-4".parse().unwrap();
        assert_eq!(p.0, [3.0, -4.0]);
    }

    #[test]
    fn keys() {
        let keys: Keys = "wW.q".parse().unwrap();
        assert_eq!(keys.at_frame(0), Some(Movement::Forward));
        assert_eq!(keys.at_frame(1), Some(Movement::Forward));
        assert_eq!(keys.at_frame(2), None);
        assert_eq!(keys.at_frame(3), Some(Movement::Down));
        assert_eq!(keys.at_frame(10), None);
        assert!("x".parse::<Keys>().is_err());
    }
}
