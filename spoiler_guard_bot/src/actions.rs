use std::time::Duration;

use crate::{
    escalation::EscalationCase,
    platform::{ChannelError, SpoilerChannel},
    spoiler_checker::SPOILER_PREFIX,
    types::ChannelId,
};

/// Human readable duration, like "1 minute" or "90 seconds".
fn describe_duration(duration: Duration) -> String {
    let seconds = duration.as_secs();
    match seconds {
        60 => "1 minute".to_string(),
        s if s % 60 == 0 => format!("{} minutes", s / 60),
        1 => "1 second".to_string(),
        s => format!("{s} seconds"),
    }
}

/// Text of the first DM, sent when the author didn't fix their message in time.
pub fn warning_text(channel_id: ChannelId, flagged_content: &str, grace_period: Duration) -> String {
    let quote = if flagged_content.trim().is_empty() {
        String::from("(no text, just attachments)")
    } else {
        format!("\"{flagged_content}\"")
    };

    format!(
        concat!(
            "Heads up! Your message in <#{channel}> is not fully hidden behind spoilers:\n\n",
            "{quote}\n\n",
            "Everything posted there has to be a spoiler. Put every piece of text between ",
            "a pair of double pipes, like `||this||`, and mark every image as a spoiler ",
            "(its file name should start with `{prefix}`).\n\n",
            "Please edit your message within {grace}, otherwise it will be removed."
        ),
        channel = channel_id,
        quote = quote,
        prefix = SPOILER_PREFIX,
        grace = describe_duration(grace_period),
    )
}

/// Text of the second DM, sent after the message got removed.
pub fn deletion_text(channel_id: ChannelId) -> String {
    format!(
        concat!(
            "Your message in <#{}> was still not spoilered, so it has been removed. ",
            "Consider this a warning!"
        ),
        channel_id
    )
}

/// DM the author about their unspoilered message.
pub async fn send_warning(
    channel: &impl SpoilerChannel,
    case: &EscalationCase,
    grace_period: Duration,
) -> Result<(), ChannelError> {
    log::info!(
        "Warning user {} about message {}.",
        case.author,
        case.message_id
    );
    let text = warning_text(case.channel_id, &case.flagged_content, grace_period);
    channel.send_direct_message(case.author, &text).await
}

/// Remove the message for good and tell the author about it.
///
/// If the removal worked but the DM didn't, that's logged and `Ok` is returned anyway,
/// since the message is gone all the same.
pub async fn punish(channel: &impl SpoilerChannel, case: &EscalationCase) -> Result<(), ChannelError> {
    channel.delete_message(case.message_id).await?;

    log::info!(
        "Deleted message {} from user {}.",
        case.message_id,
        case.author
    );

    if let Err(e) = channel
        .send_direct_message(case.author, &deletion_text(case.channel_id))
        .await
    {
        log::warn!(
            "Deleted message {} but couldn't tell user {} about it: {e}",
            case.message_id,
            case.author
        );
    }

    Ok(())
}
