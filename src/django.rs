/// Reserved for data handed over by the Django templates; holds nothing yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Django;
