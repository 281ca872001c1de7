#[cfg(test)]
mod common;


#[cfg(test)]
mod country_failure_tests;

#[cfg(test)]
mod select_keyboard_tests;

#[cfg(test)]
mod select_render_tests;
