/// Reserved for theme switching; holds nothing yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme;
