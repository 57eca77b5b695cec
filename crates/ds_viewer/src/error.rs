pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    ContentFailure(ds_site::Error),
    WindowFailure(eframe::Error),
}

impl From<ds_site::Error> for Error {
    fn from(val: ds_site::Error) -> Self {
        Self::ContentFailure(val)
    }
}

impl From<eframe::Error> for Error {
    fn from(val: eframe::Error) -> Self {
        Self::WindowFailure(val)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
