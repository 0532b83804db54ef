//! 宽高比居中裁剪
//!
//! images: NHWC

use candle_core::Tensor;

use crate::error::Error;

/// 将图像批次裁剪到 [min_aspect, max_aspect] 宽高比范围
///
/// 宽高比已在范围内时原样返回. 过宽时按 max_aspect 裁剪宽度,
/// 过高时按 min_aspect 裁剪高度, 均为单轴居中裁剪, 新边长向零截断,
/// 偏移量整除取整, 多出的一个像素落在尾部.
///
/// 返回值中的 width/height 是裁剪前的原始尺寸.
pub fn crop_to_aspect_range(
    images: &Tensor,
    min_aspect: f64,
    max_aspect: f64,
) -> Result<(Tensor, usize, usize), Error> {
    let (_batch, height, width, _channel) = images.dims4()?;
    let aspect = width as f64 / height as f64;

    if min_aspect <= aspect && aspect <= max_aspect {
        return Ok((images.clone(), width, height));
    }

    let images = if aspect > max_aspect {
        // 过宽, 裁剪宽度
        let new_width = (height as f64 * max_aspect) as usize;
        let offset = (width - new_width) / 2;
        images.narrow(2, offset, new_width)?
    } else {
        // 过高, 裁剪高度
        let new_height = (width as f64 / min_aspect) as usize;
        let offset = (height - new_height) / 2;
        images.narrow(1, offset, new_height)?
    };

    Ok((images, width, height))
}

#[cfg(test)]
mod tests {
    use candle_core::{Device, Tensor};

    use super::*;

    /// 每个元素的值等于它在整个批次中的扁平索引, 便于校验裁剪位置
    fn image_batch(
        batch: usize,
        height: usize,
        width: usize,
        channel: usize,
    ) -> anyhow::Result<Tensor> {
        let len = (batch * height * width * channel) as f32;
        let images = Tensor::arange(0f32, len, &Device::Cpu)?
            .reshape((batch, height, width, channel))?;
        Ok(images)
    }

    fn to_values(images: &Tensor) -> anyhow::Result<Vec<f32>> {
        Ok(images.flatten_all()?.to_vec1::<f32>()?)
    }

    #[test]
    fn test_within_bounds_unchanged() -> anyhow::Result<()> {
        let images = image_batch(1, 4, 6, 3)?;
        let (out, width, height) = crop_to_aspect_range(&images, 1.0, 1.5)?;

        assert_eq!(out.dims4()?, (1, 4, 6, 3));
        assert_eq!((width, height), (6, 4));
        assert_eq!(to_values(&out)?, to_values(&images)?);
        Ok(())
    }

    #[test]
    fn test_too_wide_crops_width() -> anyhow::Result<()> {
        // aspect 2.0 > 1.5: new_width = 4 * 1.5 = 6, offset = 1
        let images = image_batch(2, 4, 8, 3)?;
        let (out, width, height) = crop_to_aspect_range(&images, 1.0, 1.5)?;

        assert_eq!(out.dims4()?, (2, 4, 6, 3));
        // 返回裁剪前的尺寸
        assert_eq!((width, height), (8, 4));
        // 首元素来自第 1 列
        assert_eq!(to_values(&out)?[0], 3.0);
        Ok(())
    }

    #[test]
    fn test_too_tall_crops_height() -> anyhow::Result<()> {
        // aspect 0.5 < 1.0: new_height = 4 / 1.0 = 4, offset = 2
        let images = image_batch(1, 8, 4, 1)?;
        let (out, width, height) = crop_to_aspect_range(&images, 1.0, 1.5)?;

        assert_eq!(out.dims4()?, (1, 4, 4, 1));
        assert_eq!((width, height), (4, 8));
        // 首元素来自第 2 行
        assert_eq!(to_values(&out)?[0], 8.0);
        Ok(())
    }

    #[test]
    fn test_odd_leftover_dropped_from_trailing_side() -> anyhow::Result<()> {
        // aspect 1.75 > 1.5: new_width = 6, offset = (7 - 6) / 2 = 0
        let images = image_batch(1, 4, 7, 1)?;
        let (out, width, height) = crop_to_aspect_range(&images, 1.0, 1.5)?;

        assert_eq!(out.dims4()?, (1, 4, 6, 1));
        assert_eq!((width, height), (7, 4));
        // 保留第 0..6 列, 尾列被丢弃
        let values = to_values(&out)?;
        assert_eq!(values[0], 0.0);
        assert_eq!(values[5], 5.0);
        Ok(())
    }

    #[test]
    fn test_new_edge_truncates() -> anyhow::Result<()> {
        // aspect 2.0 > 1.2: new_width = 3 * 1.2 = 3.6 -> 3, offset = 1
        let images = image_batch(1, 3, 6, 1)?;
        let (out, _width, _height) = crop_to_aspect_range(&images, 1.0, 1.2)?;

        assert_eq!(out.dims4()?, (1, 3, 3, 1));
        assert_eq!(to_values(&out)?[0], 1.0);
        Ok(())
    }

    #[test]
    fn test_exact_target_as_degenerate_range() -> anyhow::Result<()> {
        // min = max = 1.5 与精确匹配等价
        let images = image_batch(1, 4, 6, 3)?;
        let (out, width, height) = crop_to_aspect_range(&images, 1.5, 1.5)?;

        assert_eq!(out.dims4()?, (1, 4, 6, 3));
        assert_eq!((width, height), (6, 4));

        // 1.4 不等于 1.5: new_width = 4 * 1.4 = 5.6 -> 5
        let (out, width, height) = crop_to_aspect_range(&images, 1.4, 1.4)?;
        assert_eq!(out.dims4()?, (1, 4, 5, 3));
        assert_eq!((width, height), (6, 4));
        Ok(())
    }

    #[test]
    fn test_idempotent_for_separated_bounds() -> anyhow::Result<()> {
        let images = image_batch(2, 4, 8, 3)?;
        let (once, _, _) = crop_to_aspect_range(&images, 1.0, 1.5)?;
        let (twice, width, height) = crop_to_aspect_range(&once, 1.0, 1.5)?;

        assert_eq!(once.dims4()?, twice.dims4()?);
        assert_eq!(to_values(&once)?, to_values(&twice)?);
        // 第二次调用返回的是它自己输入的尺寸
        assert_eq!((width, height), (6, 4));
        Ok(())
    }

    #[test]
    fn test_batch_and_channel_untouched() -> anyhow::Result<()> {
        let images = image_batch(3, 5, 10, 4)?;
        let (out, _, _) = crop_to_aspect_range(&images, 0.8, 1.2)?;

        let (batch, _, _, channel) = out.dims4()?;
        assert_eq!(batch, 3);
        assert_eq!(channel, 4);
        Ok(())
    }
}
