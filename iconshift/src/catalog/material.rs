//! Material `Icons.*` to `LucideIcons.*` tables.
//!
//! Patterns are written without anchors; [`super::icon_rules`] wraps each in
//! word boundaries so `LucideIcons.x` and `Icons.x_other` are never matched.
//! More specific names must come before a pattern that would also match them.

/// First-pass mapping, grouped by area.
pub const MATERIAL_ICONS: &[(&str, &str)] = &[
    // Navigation
    (r"Icons\.arrow_back", "LucideIcons.arrowLeft"),
    (r"Icons\.arrow_forward", "LucideIcons.arrowRight"),
    (r"Icons\.close", "LucideIcons.x"),
    (r"Icons\.menu", "LucideIcons.menu"),
    (r"Icons\.more_vert", "LucideIcons.moreVertical"),
    (r"Icons\.more_horiz", "LucideIcons.moreHorizontal"),
    // Notifications & alerts
    (r"Icons\.notifications(_none)?(_outlined)?", "LucideIcons.bell"),
    (r"Icons\.notifications_off(_outlined)?", "LucideIcons.bellOff"),
    (r"Icons\.error(_outline)?", "LucideIcons.alertCircle"),
    (r"Icons\.warning(_amber)?", "LucideIcons.alertTriangle"),
    (r"Icons\.info(_outline)?", "LucideIcons.info"),
    // User & profile
    (r"Icons\.person(_outline)?", "LucideIcons.user"),
    (r"Icons\.account_circle", "LucideIcons.userCircle"),
    (r"Icons\.badge(_outlined)?", "LucideIcons.badge"),
    // Communication
    (r"Icons\.mail(_outline)?(_rounded)?", "LucideIcons.mail"),
    (r"Icons\.email(_outlined)?", "LucideIcons.mail"),
    (r"Icons\.phone(_outlined)?(_android)?(_rounded)?", "LucideIcons.phone"),
    (r"Icons\.call", "LucideIcons.phone"),
    (r"Icons\.chat(_bubble)?", "LucideIcons.messageCircle"),
    (r"Icons\.message", "LucideIcons.messageSquare"),
    (r"Icons\.send(_outlined)?", "LucideIcons.send"),
    // Actions
    (r"Icons\.edit(_outlined)?", "LucideIcons.edit"),
    (r"Icons\.delete(_outline)?", "LucideIcons.trash2"),
    (r"Icons\.add(_circle)?(_outline)?", "LucideIcons.plus"),
    (r"Icons\.remove(_circle)?(_outline)?", "LucideIcons.minus"),
    (r"Icons\.check(_circle)?(_outline)?", "LucideIcons.check"),
    (r"Icons\.cancel", "LucideIcons.xCircle"),
    // Files & upload
    (r"Icons\.upload(_file)?", "LucideIcons.upload"),
    (r"Icons\.download", "LucideIcons.download"),
    (r"Icons\.cloud_upload(_outlined)?", "LucideIcons.cloudUpload"),
    (r"Icons\.attach_file", "LucideIcons.paperclip"),
    (r"Icons\.insert_drive_file", "LucideIcons.file"),
    (r"Icons\.folder(_open)?", "LucideIcons.folder"),
    // Media
    (r"Icons\.image(_not_supported)?(_outlined)?", "LucideIcons.image"),
    (r"Icons\.photo(_outlined)?", "LucideIcons.image"),
    (r"Icons\.camera(_alt)?", "LucideIcons.camera"),
    (r"Icons\.video_camera_back", "LucideIcons.video"),
    (r"Icons\.broken_image", "LucideIcons.imageOff"),
    // Location & map
    (r"Icons\.location_on(_outlined)?", "LucideIcons.mapPin"),
    (r"Icons\.place(_outlined)?", "LucideIcons.mapPin"),
    (r"Icons\.location_pin", "LucideIcons.mapPin"),
    (r"Icons\.map", "LucideIcons.map"),
    // Date & time
    (r"Icons\.calendar(_today)?(_rounded)?(_outlined)?", "LucideIcons.calendar"),
    (r"Icons\.event(_available)?(_busy)?(_outlined)?", "LucideIcons.calendarDays"),
    (r"Icons\.calendar_month", "LucideIcons.calendar"),
    (r"Icons\.access_time", "LucideIcons.clock"),
    (r"Icons\.schedule", "LucideIcons.clock"),
    (r"Icons\.timer", "LucideIcons.timer"),
    (r"Icons\.hourglass_bottom", "LucideIcons.hourglass"),
    (r"Icons\.history", "LucideIcons.history"),
    // Security
    (r"Icons\.lock(_open)?(_outline)?", "LucideIcons.lock"),
    (r"Icons\.visibility", "LucideIcons.eye"),
    (r"Icons\.visibility_off", "LucideIcons.eyeOff"),
    (r"Icons\.security", "LucideIcons.shield"),
    // Finance & payment
    (r"Icons\.payment", "LucideIcons.creditCard"),
    (r"Icons\.credit_card(s)?(_outlined)?", "LucideIcons.creditCard"),
    (r"Icons\.account_balance(_wallet)?(_outlined)?", "LucideIcons.wallet"),
    (r"Icons\.monetization_on(_outlined)?", "LucideIcons.dollarSign"),
    (r"Icons\.receipt(_long)?(_outlined)?", "LucideIcons.receipt"),
    (r"Icons\.payments(_outlined)?", "LucideIcons.banknote"),
    (r"Icons\.swap_horiz", "LucideIcons.arrowLeftRight"),
    // Property & home
    (r"Icons\.home(_work)?(_outlined)?", "LucideIcons.home"),
    (r"Icons\.house", "LucideIcons.home"),
    (r"Icons\.apartment(_outlined)?", "LucideIcons.building"),
    (r"Icons\.business", "LucideIcons.building2"),
    (r"Icons\.bed(_outlined)?", "LucideIcons.bed"),
    (r"Icons\.bathtub(_outlined)?", "LucideIcons.bath"),
    (r"Icons\.square_foot", "LucideIcons.square"),
    // Search & filter
    (r"Icons\.search", "LucideIcons.search"),
    (r"Icons\.filter_list", "LucideIcons.filter"),
    (r"Icons\.sort", "LucideIcons.arrowUpDown"),
    // Charts & stats
    (r"Icons\.pie_chart(_outline)?", "LucideIcons.pieChart"),
    (r"Icons\.bar_chart", "LucideIcons.barChart"),
    (r"Icons\.trending_up", "LucideIcons.trendingUp"),
    (r"Icons\.analytics", "LucideIcons.lineChart"),
    // Documents
    (r"Icons\.description", "LucideIcons.fileText"),
    (r"Icons\.note(_alt)?(_outlined)?", "LucideIcons.fileText"),
    (r"Icons\.report", "LucideIcons.fileText"),
    (r"Icons\.article", "LucideIcons.newspaper"),
    // Numbers
    (r"Icons\.numbers", "LucideIcons.hash"),
    (r"Icons\.tag", "LucideIcons.tag"),
];

/// Second-pass mapping for icons the first table did not cover.
pub const REMAINING_ICONS: &[(&str, &str)] = &[
    (r"Icons\.settings", "LucideIcons.settings"),
    (r"Icons\.logout", "LucideIcons.logOut"),
    (r"Icons\.verified(_outlined)?", "LucideIcons.badgeCheck"),
    (r"Icons\.star(_border)?(_outline)?(_rounded)?", "LucideIcons.star"),
    (r"Icons\.favorite(_border)?", "LucideIcons.heart"),
    (r"Icons\.share", "LucideIcons.share2"),
    (r"Icons\.bookmark(_added)?(_border)?(_outlined)?", "LucideIcons.bookmark"),
    (r"Icons\.refresh", "LucideIcons.refreshCw"),
    (r"Icons\.sync", "LucideIcons.refreshCw"),
    (r"Icons\.help(_outline)?", "LucideIcons.helpCircle"),
    (r"Icons\.question_mark", "LucideIcons.helpCircle"),
    (r"Icons\.expand_more", "LucideIcons.chevronDown"),
    (r"Icons\.expand_less", "LucideIcons.chevronUp"),
    (r"Icons\.chevron_right", "LucideIcons.chevronRight"),
    (r"Icons\.chevron_left", "LucideIcons.chevronLeft"),
    (r"Icons\.keyboard_arrow_down", "LucideIcons.chevronDown"),
    (r"Icons\.keyboard_arrow_up", "LucideIcons.chevronUp"),
    (r"Icons\.keyboard_arrow_right", "LucideIcons.chevronRight"),
    (r"Icons\.keyboard_arrow_left", "LucideIcons.chevronLeft"),
    (r"Icons\.done", "LucideIcons.check"),
    (r"Icons\.clear", "LucideIcons.x"),
    (r"Icons\.block", "LucideIcons.ban"),
    (r"Icons\.flag", "LucideIcons.flag"),
    (r"Icons\.thumb_up", "LucideIcons.thumbsUp"),
    (r"Icons\.thumb_down", "LucideIcons.thumbsDown"),
    (r"Icons\.visibility_outlined", "LucideIcons.eye"),
    (r"Icons\.comment", "LucideIcons.messageSquare"),
    (r"Icons\.reply", "LucideIcons.reply"),
    (r"Icons\.forward", "LucideIcons.forward"),
    (r"Icons\.save", "LucideIcons.save"),
    (r"Icons\.print", "LucideIcons.printer"),
    (r"Icons\.copy", "LucideIcons.copy"),
    (r"Icons\.paste", "LucideIcons.clipboard"),
    (r"Icons\.cut", "LucideIcons.scissors"),
    (r"Icons\.undo", "LucideIcons.undo"),
    (r"Icons\.redo", "LucideIcons.redo"),
    (r"Icons\.zoom_in", "LucideIcons.zoomIn"),
    (r"Icons\.zoom_out", "LucideIcons.zoomOut"),
    (r"Icons\.fullscreen", "LucideIcons.maximize"),
    (r"Icons\.fullscreen_exit", "LucideIcons.minimize"),
    (r"Icons\.play_arrow", "LucideIcons.play"),
    (r"Icons\.pause", "LucideIcons.pause"),
    (r"Icons\.stop", "LucideIcons.square"),
    (r"Icons\.skip_next", "LucideIcons.skipForward"),
    (r"Icons\.skip_previous", "LucideIcons.skipBack"),
    (r"Icons\.volume_up", "LucideIcons.volume2"),
    (r"Icons\.volume_down", "LucideIcons.volume1"),
    (r"Icons\.volume_off", "LucideIcons.volumeX"),
    (r"Icons\.brightness_high", "LucideIcons.sun"),
    (r"Icons\.brightness_low", "LucideIcons.moon"),
    (r"Icons\.wifi", "LucideIcons.wifi"),
    (r"Icons\.bluetooth", "LucideIcons.bluetooth"),
    (r"Icons\.battery_full", "LucideIcons.battery"),
    (r"Icons\.signal_cellular_alt", "LucideIcons.signal"),
];
