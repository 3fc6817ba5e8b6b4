#[cfg(test)]
mod pipeline;
#[cfg(test)]
mod support;
