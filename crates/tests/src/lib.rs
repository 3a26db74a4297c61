#[cfg(test)]
mod common;

#[cfg(test)]
mod guard_tests;

#[cfg(test)]
mod dispatch_tests;


#[cfg(test)]
mod flow_tests;
