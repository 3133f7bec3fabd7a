//! Consolidated test utilities for the box score exporter.

#![cfg(test)]

pub mod html;
