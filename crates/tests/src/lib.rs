#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod appointment_tests;

#[cfg(test)]
mod admin_tests;

#[cfg(test)]
mod session_flow_tests;
