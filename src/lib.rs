//! A player gliding through a bounded arena around rectangular obstacles.
//!
//! [`domain`] holds the movement rules and the obstacle registry without any dependency on the
//! ECS. The remaining modules wire them into a Bevy app: the [`controller`] samples the keyboard,
//! the [`simulator`] advances the player once per frame and the [`visualizer`] draws the arena.


pub mod controller;
pub mod domain;
pub mod resource;
pub mod simulator;
pub mod visualizer;
