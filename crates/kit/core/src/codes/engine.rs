//! Room engine error codes.
//!
//! This is the widest domain: it covers engine lifecycle, media devices,
//! room identity, membership preconditions, permissions, invitation
//! requests, seat management, and chat restrictions. Discriminants are
//! grouped by family: `-1xxx` engine/device, `-21xx` room, `-22xx` user,
//! `-23xx` request/seat/chat.

/// Error codes raised by the room engine.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::FromRepr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[repr(i32)]
pub enum EngineCode {
    Success = 0,
    Failed = -1,
    FreqLimit = -2,
    RepeatOperation = -3,

    // Engine lifecycle
    SdkAppIdNotFound = -1000,
    InvalidParameter = -1001,
    SdkNotInitialized = -1002,
    PermissionDenied = -1003,
    RequirePayment = -1004,

    // Media devices
    CameraStartFail = -1100,
    CameraNotAuthorized = -1101,
    CameraOccupied = -1102,
    CameraDeviceEmpty = -1103,
    MicrophoneStartFail = -1104,
    MicrophoneNotAuthorized = -1105,
    MicrophoneOccupied = -1106,
    MicrophoneDeviceEmpty = -1107,
    GetScreenSharingTargetFailed = -1108,
    StartScreenSharingFailed = -1109,

    // Room identity and membership
    OperationInvalidBeforeEnterRoom = -2101,
    ExitNotSupportedForRoomOwner = -2102,
    OperationNotSupportedInCurrentRoomType = -2103,
    RoomIdInvalid = -2105,
    RoomIdOccupied = -2106,
    RoomIdNotExist = -2107,
    RoomNameInvalid = -2108,
    AlreadyInOtherRoom = -2109,

    // Users and permissions
    UserNotExist = -2200,
    UserNotEntered = -2201,
    UserNeedOwnerPermission = -2300,
    UserNeedAdminPermission = -2301,

    // Invitation requests
    RequestNoPermission = -2310,
    RequestIdInvalid = -2311,
    RequestIdRepeat = -2312,
    RequestIdConflict = -2313,

    // Seat management
    MaxSeatCountLimit = -2340,
    AlreadyInSeat = -2341,
    SeatOccupied = -2342,
    SeatLocked = -2343,
    SeatIndexNotExist = -2344,
    UserNotInSeat = -2345,
    AllSeatOccupied = -2346,
    SeatNotSupportLinkMic = -2347,
    OpenMicrophoneNeedSeatUnlock = -2360,
    OpenMicrophoneNeedPermissionFromAdmin = -2361,
    OpenCameraNeedSeatUnlock = -2370,
    OpenCameraNeedPermissionFromAdmin = -2371,
    OpenScreenShareNeedSeatUnlock = -2372,
    OpenScreenShareNeedPermissionFromAdmin = -2373,

    // Chat restrictions
    SendMessageDisabledForAll = -2380,
    SendMessageDisabledForCurrent = -2381,

    /// Linking a co-anchor is blocked while the room is connected elsewhere.
    RoomConnectedInOther = -2390,
}

impl EngineCode {
    /// Key resolved for engine codes outside the known set.
    pub const FALLBACK_KEY: &'static str = crate::GENERIC_FAILURE_KEY;

    /// Localization key for this code.
    pub const fn localization_key(self) -> &'static str {
        match self {
            Self::Success => "live.error.success",
            Self::Failed => "live.error.failed",
            Self::FreqLimit => "live.error.freqLimit",
            Self::RepeatOperation => "live.error.repeat.operation",
            Self::SdkAppIdNotFound => "live.error.sdkAppId.notFound",
            Self::InvalidParameter => "live.error.invalidParameter",
            Self::SdkNotInitialized => "live.error.sdkNotInitialized",
            Self::PermissionDenied => "live.error.permissionDenied",
            Self::RequirePayment => "live.error.requirePayment",
            Self::CameraStartFail => "live.error.cameraStartFail",
            Self::CameraNotAuthorized => "live.error.cameraNotAuthorized",
            Self::CameraOccupied => "live.error.cameraOccupied",
            Self::CameraDeviceEmpty => "live.error.cameraDeviceEmpty",
            Self::MicrophoneStartFail => "live.error.microphoneStartFail",
            Self::MicrophoneNotAuthorized => "live.error.microphoneNotAuthorized",
            Self::MicrophoneOccupied => "live.error.microphoneOccupied",
            Self::MicrophoneDeviceEmpty => "live.error.microphoneDeviceEmpty",
            Self::GetScreenSharingTargetFailed => "live.error.getScreenSharingTargetFailed",
            Self::StartScreenSharingFailed => "live.error.startScreenSharingFailed",
            Self::OperationInvalidBeforeEnterRoom => "live.error.operation.invalid.beforeEnterRoom",
            Self::ExitNotSupportedForRoomOwner => "live.error.exitNotSupported.forRoomOwner",
            Self::OperationNotSupportedInCurrentRoomType => {
                "live.error.operation.notSupported.inCurrentSpeechMode"
            }
            Self::RoomIdInvalid => "live.error.roomId.invalid",
            Self::RoomIdOccupied => "live.error.roomId.occupied",
            Self::RoomIdNotExist => "live.error.roomId.notExist",
            Self::RoomNameInvalid => "live.error.roomName.invalid",
            Self::AlreadyInOtherRoom => "live.error.already.in.OtherRoom",
            Self::UserNotExist => "live.error.userNotExist",
            Self::UserNotEntered => "live.error.userNotEntered",
            Self::UserNeedOwnerPermission => "live.error.user.need.OwnerPermission",
            Self::UserNeedAdminPermission => "live.error.user.need.AdminPermission",
            Self::RequestNoPermission => "live.error.request.noPermission",
            Self::RequestIdInvalid => "live.error.requestId.invalid",
            Self::RequestIdRepeat => "live.error.repeat.requestId",
            Self::RequestIdConflict => "live.error.conflict.requestId",
            Self::MaxSeatCountLimit => "live.error.max.seat.count.limit",
            Self::AlreadyInSeat => "live.error.already.in.seat",
            Self::SeatOccupied => "live.error.seat.occupied",
            Self::SeatLocked => "live.error.seat.locked",
            Self::SeatIndexNotExist => "live.error.seat.index.not.exist",
            Self::UserNotInSeat => "live.error.user.not.in.seat",
            Self::AllSeatOccupied => "live.error.all.seat.occupied",
            Self::SeatNotSupportLinkMic => "live.error.seat.not.support.link.mic",
            Self::OpenMicrophoneNeedSeatUnlock => "live.error.open.microphone.need.seat.unlock",
            Self::OpenMicrophoneNeedPermissionFromAdmin => {
                "live.error.open.microphone.need.permission.from.admin"
            }
            Self::OpenCameraNeedSeatUnlock => "live.error.open.camera.need.seat.unlock",
            Self::OpenCameraNeedPermissionFromAdmin => {
                "live.error.open.camera.need.permission.from.admin"
            }
            Self::OpenScreenShareNeedSeatUnlock => "live.error.open.screen.share.need.seat.unlock",
            Self::OpenScreenShareNeedPermissionFromAdmin => {
                "live.error.open.screen.share.need.permission.from.admin"
            }
            Self::SendMessageDisabledForAll => "live.error.send.message.disabled.for.all",
            Self::SendMessageDisabledForCurrent => "live.error.send.message.disabled.for.current",
            Self::RoomConnectedInOther => "live.error.linkMicDisable.connecting",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn discriminants_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for code in EngineCode::iter() {
            assert!(seen.insert(code as i32), "duplicate discriminant: {code}");
        }
    }

    #[test]
    fn every_code_has_a_nonempty_key() {
        for code in EngineCode::iter() {
            assert!(!code.localization_key().is_empty(), "empty key for {code}");
        }
    }

    #[test]
    fn device_family_round_trips() {
        assert_eq!(
            EngineCode::from_repr(-1102),
            Some(EngineCode::CameraOccupied)
        );
        assert_eq!(
            EngineCode::CameraOccupied.localization_key(),
            "live.error.cameraOccupied"
        );
    }
}
