#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street  : String,
    pub city    : String,
    pub state   : String,
    pub country : String,
}
