//! Root kinds for the standard library's error types.

use std::{
    array::TryFromSliceError,
    char::{CharTryFromError, DecodeUtf16Error, ParseCharError},
    convert::Infallible,
    env::{JoinPathsError, VarError},
    ffi::{FromBytesWithNulError, IntoStringError, NulError},
    num::{ParseFloatError, ParseIntError, TryFromIntError},
    str::{ParseBoolError, Utf8Error},
    string::{FromUtf8Error, FromUtf16Error},
    sync::mpsc::{RecvError, RecvTimeoutError, TryRecvError},
    time::SystemTimeError,
};

use super::Kind;
use crate::error::{Panicked, UnwrapFailure};

impl Kind for std::io::Error {}
impl Kind for std::fmt::Error {}
impl Kind for std::net::AddrParseError {}
impl Kind for ParseIntError {}
impl Kind for ParseFloatError {}
impl Kind for ParseBoolError {}
impl Kind for ParseCharError {}
impl Kind for TryFromIntError {}
impl Kind for CharTryFromError {}
impl Kind for TryFromSliceError {}
impl Kind for DecodeUtf16Error {}
impl Kind for Utf8Error {}
impl Kind for FromUtf8Error {}
impl Kind for FromUtf16Error {}
impl Kind for NulError {}
impl Kind for FromBytesWithNulError {}
impl Kind for IntoStringError {}
impl Kind for VarError {}
impl Kind for JoinPathsError {}
impl Kind for SystemTimeError {}
impl Kind for RecvError {}
impl Kind for TryRecvError {}
impl Kind for RecvTimeoutError {}
impl Kind for Infallible {}

impl Kind for Panicked {}
impl Kind for UnwrapFailure {}
