use campus_core::playback::PlayerConfig;

/// Waits for the `<video>` element, builds the Plyr instance and reports
/// native events back through `dioxus.send` as `{kind, position, duration}`.
const MOUNT_SCRIPT_TEMPLATE: &str = r#"
    const elementId = "{element_id}";
    const options = {options};
    const players = window.__campusPlayers || (window.__campusPlayers = {});
    const report = (kind, media) => {
        dioxus.send({
            kind,
            position: Number.isFinite(media.currentTime) ? media.currentTime : 0,
            duration: Number.isFinite(media.duration) ? media.duration : 0,
        });
    };
    const start = () => {
        if (elementId in players) {
            return;
        }
        const media = document.getElementById(elementId);
        if (!media) {
            requestAnimationFrame(start);
            return;
        }
        const player = new Plyr(media, options);
        players[elementId] = player;
        player.on("timeupdate", () => report("time_update", media));
        player.on("seeked", () => report("seeked", media));
        player.on("ended", () => dioxus.send({ kind: "ended" }));
    };
    start();
    await new Promise(() => {});
"#;

const DESTROY_SCRIPT_TEMPLATE: &str = r#"
    const players = window.__campusPlayers || (window.__campusPlayers = {});
    const player = players["{element_id}"];
    if (player) {
        player.destroy();
    }
    players["{element_id}"] = null;
"#;

pub(super) fn mount_script(element_id: &str, config: &PlayerConfig) -> Result<String, serde_json::Error> {
    let options = serde_json::to_string(config)?;
    Ok(MOUNT_SCRIPT_TEMPLATE
        .replace("{element_id}", element_id)
        .replace("{options}", &options))
}

pub(super) fn destroy_script(element_id: &str) -> String {
    DESTROY_SCRIPT_TEMPLATE.replace("{element_id}", element_id)
}
