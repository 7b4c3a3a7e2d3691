//! 수익성 모델과 최적화 로직을 라이브러리로 분리하여 CLI 외의 재사용도 쉽게 한다.

pub mod app;
pub mod config;
pub mod finance;
pub mod i18n;
pub mod optimizer;
pub mod simplex;
pub mod ui_cli;
